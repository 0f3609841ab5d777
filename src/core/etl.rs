use crate::core::pipeline::render_document;
use crate::core::{Document, Pipeline, TransformStats};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: String,
    /// 輸入無法使用、改以空文件處理時為 true
    pub input_recovered: bool,
    pub stats: TransformStats,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting JSON processing...");

        // Extract
        let outcome = self.pipeline.extract();
        let input_recovered = outcome.is_recovered();
        let document = outcome.into_document();
        tracing::info!("Extracted {} top-level values", document.len());

        println!("\nBefore processing: {}", snapshot(&document)?);

        // Transform
        let result = self.pipeline.transform(document);
        tracing::info!(
            "Transformed values: {} timestamps rewritten, {} strings reversed, {} lists deduplicated, {} unchanged",
            result.stats.timestamps_rewritten,
            result.stats.strings_reversed,
            result.stats.lists_deduplicated,
            result.stats.passed_through
        );

        println!("\nAfter processing: {}", snapshot(&result.document)?);

        // Load
        let stats = result.stats;
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunSummary {
            output_path,
            input_recovered,
            stats,
        })
    }
}

fn snapshot(document: &Document) -> Result<String> {
    let rendered = render_document(document)?;
    Ok(String::from_utf8_lossy(&rendered).into_owned())
}
