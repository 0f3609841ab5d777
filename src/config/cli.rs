use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_not_directory, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "json-processor", version)]
#[command(about = "Rewrites timestamps, reverses text and deduplicates lists in a JSON document")]
pub struct CliConfig {
    /// JSON document to read (top level must be an object)
    #[arg(value_name = "INPUT_FILE")]
    pub input_path: String,

    /// Where the processed document is written (overwritten if present)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_path: String,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    // 輸入檔讀不到時會降級成空文件，不在這裡擋
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_not_directory("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_two_positional_paths() {
        let config =
            CliConfig::try_parse_from(["json-processor", "in.json", "out.json"]).unwrap();
        assert_eq!(config.input_path(), "in.json");
        assert_eq!(config.output_path(), "out.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert!(CliConfig::try_parse_from(["json-processor"]).is_err());
        assert!(CliConfig::try_parse_from(["json-processor", "in.json"]).is_err());
        assert!(
            CliConfig::try_parse_from(["json-processor", "a.json", "b.json", "c.json"])
                .is_err()
        );
    }

    #[test]
    fn test_validate_accepts_unusable_input_path() {
        for input in ["", "   "] {
            let config = CliConfig {
                input_path: input.to_string(),
                output_path: "out.json".to_string(),
            };
            assert!(config.validate().is_ok(), "{input:?}");
        }
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let config = CliConfig {
            input_path: "in.json".to_string(),
            output_path: String::new(),
        };
        assert!(config.validate().is_err());
    }
}
