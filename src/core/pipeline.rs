use crate::core::transform::transform_document;
use crate::core::{ConfigProvider, Document, LoadOutcome, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Printed to stdout whenever the input document cannot be used.
pub const BAD_INPUT_MARKER: &str = "Bad input";

const OUTPUT_INDENT: &[u8] = b"    ";

pub struct JsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> JsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_document(&self, path: &str) -> Result<Document> {
        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path);

        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Object(document) => Ok(document),
            other => Err(EtlError::InvalidDocumentError {
                message: format!(
                    "expected an object at the top level, found {}",
                    json_type_name(&other)
                ),
            }),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for JsonPipeline<S, C> {
    fn extract(&self) -> LoadOutcome {
        let path = self.config.input_path();
        tracing::debug!("Loading input document from: {}", path);

        match self.read_document(path) {
            Ok(document) => LoadOutcome::Loaded(document),
            Err(reason) => {
                println!("{}", BAD_INPUT_MARKER);
                let message = reason.to_string();
                let outcome = LoadOutcome::Recovered { reason };
                tracing::warn!(
                    "Could not load '{}' ({}, Severity: {:?}), continuing with an empty document",
                    path,
                    message,
                    outcome.severity()
                );
                outcome
            }
        }
    }

    fn transform(&self, document: Document) -> TransformResult {
        transform_document(document)
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();
        let data = render_document(&result.document)?;

        tracing::debug!("Writing {} bytes to {}", data.len(), output_path);
        self.storage.write_file(output_path, &data)?;

        Ok(output_path.to_string())
    }
}

/// Pretty JSON with a four-space indent and no trailing newline.
pub fn render_document(document: &Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(OUTPUT_INDENT));
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
