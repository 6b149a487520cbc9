use crate::domain::model::{OutputFormat, SpiralReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// 提供原始矩陣文字的外部來源
pub trait MatrixSource: Send + Sync {
    fn fetch(&self) -> impl std::future::Future<Output = Result<String>> + Send;
    fn describe(&self) -> String;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> Option<&str>;
    fn source_file(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
    fn allow_empty(&self) -> bool;

    fn source_headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, raw: String) -> Result<SpiralReport>;
    async fn load(&self, report: SpiralReport) -> Result<String>;
}
