use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting overlap analysis...");

        // Extract
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} records", raw_data.len());

        // Transform
        let transformed = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "🔄 Found {} pairs in {} projects",
            transformed.results.len(),
            transformed.project_count
        );
        if transformed.skipped_rows > 0 {
            tracing::warn!("⚠️ {} invalid rows were skipped", transformed.skipped_rows);
        }

        // Load
        let destination = self.pipeline.load(transformed).await?;
        tracing::info!("📁 Output written to: {} ({:?})", destination, started.elapsed());

        Ok(destination)
    }
}
