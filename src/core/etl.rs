use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let name = self.pipeline.name();
        tracing::info!("Starting {} pipeline", name);

        // Extract
        tracing::debug!("[{}] Extracting data...", name);
        let raw_data = self.pipeline.extract().await?;

        // Transform
        tracing::debug!("[{}] Building KML...", name);
        let output = self.pipeline.transform(raw_data).await?;
        tracing::info!("[{}] Built {} placemarks", name, output.placemark_count);

        // Load
        let output_path = self.pipeline.load(output).await?;
        tracing::info!("[{}] Output saved to: {}", name, output_path);

        Ok(output_path)
    }
}
