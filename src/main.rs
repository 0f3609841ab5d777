use clap::Parser;
use json_processor::utils::{logger, validation::Validate};
use json_processor::{CliConfig, EtlEngine, JsonPipeline, LocalStorage};

fn main() -> anyhow::Result<()> {
    // 參數數量不對時 clap 會印出 usage 並結束，不會寫任何檔案
    let config = CliConfig::parse();

    logger::init_cli_logger()?;
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let pipeline = JsonPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            if summary.input_recovered {
                tracing::warn!("Input could not be used, wrote an empty document");
            }
            tracing::info!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.severity().exit_code();

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
