use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in sequence. Returns the output path,
    /// or `None` when the run produced no rows and no file was written.
    pub async fn run(&self) -> Result<Option<String>> {
        tracing::info!("Starting Pokémon ETL pipeline");

        let outcomes = self.pipeline.extract().await?;
        tracing::info!("Extract finished: {} IDs attempted", outcomes.len());

        let result = self.pipeline.transform(outcomes).await?;
        for skip in &result.skipped {
            tracing::warn!("Skipped pokemon {}: {}", skip.id, skip.reason);
        }
        tracing::info!(
            "Transform finished: {} rows, {} skipped",
            result.rows.len(),
            result.skipped.len()
        );

        let output = self.pipeline.load(result.rows).await?;
        match &output {
            Some(path) => tracing::info!("Output saved to: {}", path),
            None => tracing::warn!("No data to save, no file written"),
        }

        Ok(output)
    }
}
