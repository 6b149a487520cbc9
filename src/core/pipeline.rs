use crate::core::parser::MatrixParser;
use crate::core::spiral::SpiralTraverser;
use crate::core::{ConfigProvider, MatrixSource, OutputFormat, Pipeline, SpiralReport, Storage};
use crate::utils::error::{Result, SpiralError};

/// 取得矩陣文字、解析、螺旋遍歷並輸出結果
pub struct MatrixPipeline<M: MatrixSource, S: Storage, C: ConfigProvider> {
    source: M,
    storage: S,
    config: C,
}

impl<M: MatrixSource, S: Storage, C: ConfigProvider> MatrixPipeline<M, S, C> {
    pub fn new(source: M, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    fn render(&self, report: &SpiralReport) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Text => Ok(report.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

#[async_trait::async_trait]
impl<M: MatrixSource, S: Storage, C: ConfigProvider> Pipeline for MatrixPipeline<M, S, C> {
    async fn extract(&self) -> Result<String> {
        tracing::info!("📥 Fetching matrix from: {}", self.source.describe());
        self.source.fetch().await
    }

    async fn transform(&self, raw: String) -> Result<SpiralReport> {
        let matrix = MatrixParser::parse(&raw)?;
        tracing::debug!("Parsed {}x{} matrix", matrix.dimension(), matrix.dimension());

        if matrix.is_empty() {
            if !self.config.allow_empty() {
                return Err(SpiralError::EmptyMatrix);
            }
            tracing::warn!("Matrix is empty, producing an empty sequence");
        }

        let sequence = SpiralTraverser::traverse(&matrix);
        Ok(SpiralReport::new(
            self.source.describe(),
            matrix.dimension(),
            sequence,
        ))
    }

    async fn load(&self, report: SpiralReport) -> Result<String> {
        let rendered = self.render(&report)?;

        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("Writing {} bytes to {}", rendered.len(), path);
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                println!("{}", rendered);
                Ok("stdout".to_string())
            }
        }
    }
}
