use crate::domain::ports::MatrixSource;
use crate::utils::error::{Result, SpiralError};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// 透過 HTTP GET 取得矩陣文字
#[derive(Debug, Clone)]
pub struct HttpMatrixSource {
    client: Client,
    url: String,
    headers: HashMap<String, String>,
}

impl HttpMatrixSource {
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            headers: HashMap::new(),
        })
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MatrixSource for HttpMatrixSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Making matrix request to: {}", self.url);

        let mut request = self.client.get(&self.url);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Matrix response status: {}", status);

        if !status.is_success() {
            return Err(SpiralError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes of matrix text", body.len());
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(200).body("| 1 |\n");
        });

        let source = HttpMatrixSource::new(server.url("/matrix.txt"), 5).unwrap();
        let body = source.fetch().await.unwrap();

        api_mock.assert();
        assert_eq!(body, "| 1 |\n");
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let source = HttpMatrixSource::new(server.url("/missing"), 5).unwrap();
        let err = source.fetch().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, SpiralError::ServerError { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_sends_custom_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/matrix.txt")
                .header("Authorization", "Bearer token-123");
            then.status(200).body("| 9 |");
        });

        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer token-123".to_string());
        let source = HttpMatrixSource::new(server.url("/matrix.txt"), 5)
            .unwrap()
            .with_headers(headers);

        assert_eq!(source.fetch().await.unwrap(), "| 9 |");
        api_mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // 沒有服務在這個埠上
        let source = HttpMatrixSource::new("http://127.0.0.1:1/matrix.txt", 2).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SpiralError::NetworkError(_)));
    }
}
