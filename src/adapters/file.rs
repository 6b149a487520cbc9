use crate::domain::ports::MatrixSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// 從本地檔案讀取矩陣文字
#[derive(Debug, Clone)]
pub struct FileMatrixSource {
    path: PathBuf,
}

impl FileMatrixSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatrixSource for FileMatrixSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Reading matrix from file: {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SpiralError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"| 1 | 2 |\n| 4 | 3 |\n").unwrap();

        let source = FileMatrixSource::new(temp_file.path());
        assert_eq!(source.fetch().await.unwrap(), "| 1 | 2 |\n| 4 | 3 |\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileMatrixSource::new("/definitely/not/here/matrix.txt");
        assert!(matches!(
            source.fetch().await.unwrap_err(),
            SpiralError::IoError(_)
        ));
    }
}
