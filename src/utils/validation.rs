use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_not_directory(field_name: &str, path: &str) -> Result<()> {
    if std::path::Path::new(path).is_dir() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path points to a directory, expected a file".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "data/input.json").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "   ").is_err());
        assert!(validate_path("input_path", "bad\0path.json").is_err());
    }

    #[test]
    fn test_validate_not_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let dir_path = dir.path().to_str().unwrap();
        assert!(validate_not_directory("output_path", dir_path).is_err());

        let file_path = dir.path().join("out.json");
        assert!(validate_not_directory("output_path", file_path.to_str().unwrap()).is_ok());
    }
}
