use crate::adapters::{FileMatrixSource, HttpMatrixSource};
use crate::core::pipeline::MatrixPipeline;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, SpiralError};

pub struct SpiralEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SpiralEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting spiral traversal...");

        // Extract
        let raw_text = self.pipeline.extract().await?;
        tracing::info!("Fetched {} bytes of matrix text", raw_text.len());

        // Transform
        let report = self.pipeline.transform(raw_text).await?;
        tracing::info!(
            "Traversed {}x{} matrix into {} values",
            report.dimension,
            report.dimension,
            report.sequence.len()
        );

        // Load
        let destination = self.pipeline.load(report).await?;
        tracing::info!("Result written to: {}", destination);

        Ok(destination)
    }
}

/// 依配置選擇來源（檔案優先於 URL）並執行整個流程
pub async fn run_configured<C: ConfigProvider, S: Storage>(config: C, storage: S) -> Result<String> {
    if let Some(file) = config.source_file().map(str::to_string) {
        let source = FileMatrixSource::new(file);
        return SpiralEngine::new(MatrixPipeline::new(source, storage, config))
            .run()
            .await;
    }

    let url = config
        .source_url()
        .ok_or_else(|| SpiralError::MissingConfigError {
            field: "url".to_string(),
        })?
        .to_string();

    let mut source = HttpMatrixSource::new(url, config.timeout_seconds())?;
    if let Some(headers) = config.source_headers() {
        source = source.with_headers(headers.clone());
    }

    SpiralEngine::new(MatrixPipeline::new(source, storage, config))
        .run()
        .await
}
