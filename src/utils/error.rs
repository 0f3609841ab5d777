use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid document: {message}")]
    InvalidDocumentError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Recovered locally, e.g. an unusable input replaced by an empty document.
    Low,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity. `Low` never fails the run.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::SerializationError(_) | EtlError::InvalidDocumentError { .. } => {
                ErrorCategory::Data
            }
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入文件問題會被降級處理，只算警告
            EtlError::InvalidDocumentError { .. } => ErrorSeverity::Low,
            EtlError::SerializationError(_) | EtlError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::IoError(_) => {
                "Check that the paths exist and that you have permission to read and write them"
                    .to_string()
            }
            EtlError::SerializationError(_) | EtlError::InvalidDocumentError { .. } => {
                "Make sure the input file is valid JSON with an object at the top level".to_string()
            }
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}' (see --help)", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("Could not access a file: {}", e),
            EtlError::SerializationError(e) => format!("Could not serialize the document: {}", e),
            EtlError::InvalidDocumentError { message } => format!("Bad input: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid argument '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
