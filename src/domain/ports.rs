use crate::domain::model::{Document, LoadOutcome, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    /// Never fails: unreadable or malformed input is reported through `LoadOutcome`.
    fn extract(&self) -> LoadOutcome;
    fn transform(&self, document: Document) -> TransformResult;
    fn load(&self, result: TransformResult) -> Result<String>;
}
