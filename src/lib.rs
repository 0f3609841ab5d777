pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::storage::LocalStorage;

pub use crate::core::{
    etl::{EtlEngine, RunSummary},
    pipeline::JsonPipeline,
    transform::{transform_document, transform_value},
};
pub use crate::domain::model::{Document, LoadOutcome, TransformResult, TransformStats};
pub use crate::utils::error::{EtlError, Result};
