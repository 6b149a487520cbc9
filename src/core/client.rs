use crate::adapters::http::{HttpMatrixSource, DEFAULT_TIMEOUT_SECONDS};
use crate::core::parser::MatrixParser;
use crate::core::spiral::SpiralTraverser;
use crate::domain::model::Matrix;
use crate::domain::ports::MatrixSource;
use crate::utils::error::{Result, SpiralError};

/// 下載並解析矩陣，空矩陣視為錯誤
pub async fn fetch_matrix(source: &impl MatrixSource) -> Result<Matrix> {
    let text = source.fetch().await?;
    let matrix = MatrixParser::parse(&text)?;

    if matrix.is_empty() {
        return Err(SpiralError::EmptyMatrix);
    }

    Ok(matrix)
}

/// Fetches the matrix at `url` and returns its counter-clockwise spiral.
pub async fn get_matrix(url: &str) -> Result<Vec<i64>> {
    let source = HttpMatrixSource::new(url, DEFAULT_TIMEOUT_SECONDS)?;
    let matrix = fetch_matrix(&source).await?;
    Ok(SpiralTraverser::traverse(&matrix))
}

/// Like [`get_matrix`] but logs the failure and yields an empty sequence.
pub async fn get_matrix_safe(url: &str) -> Vec<i64> {
    match get_matrix(url).await {
        Ok(sequence) => sequence,
        Err(e) => {
            tracing::error!("❌ Failed to get matrix from {}: {}", url, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const MATRIX_TEXT: &str = "\
+-----+-----+-----+-----+
|  10 |  20 |  30 |  40 |
+-----+-----+-----+-----+
|  50 |  60 |  70 |  80 |
+-----+-----+-----+-----+
|  90 | 100 | 110 | 120 |
+-----+-----+-----+-----+
| 130 | 140 | 150 | 160 |
+-----+-----+-----+-----+
";

    #[tokio::test]
    async fn test_get_matrix() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(200).body(MATRIX_TEXT);
        });

        let result = get_matrix(&server.url("/matrix.txt")).await.unwrap();

        api_mock.assert();
        assert_eq!(
            result,
            vec![10, 50, 90, 130, 140, 150, 160, 120, 80, 40, 30, 20, 60, 100, 110, 70]
        );
    }

    #[tokio::test]
    async fn test_get_matrix_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(500);
        });

        let err = get_matrix(&server.url("/matrix.txt")).await.unwrap_err();
        assert!(matches!(err, SpiralError::ServerError { status: 500 }));
    }

    #[tokio::test]
    async fn test_get_matrix_empty_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(200).body("+---+\n");
        });

        let err = get_matrix(&server.url("/matrix.txt")).await.unwrap_err();
        assert!(matches!(err, SpiralError::EmptyMatrix));
    }

    #[tokio::test]
    async fn test_get_matrix_safe_swallows_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(200).body("| 1 | 2 |\n| 3 |\n");
        });

        assert!(get_matrix_safe(&server.url("/matrix.txt")).await.is_empty());
    }
}
