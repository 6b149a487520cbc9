use thiserror::Error;

/// 矩陣解析錯誤，只有兩種
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Invalid integer '{field}' on line {line}")]
    ParseError { line: usize, field: String },

    #[error("Matrix is not square: expected {expected} columns, got {actual} in row {row}")]
    ShapeError {
        expected: usize,
        actual: usize,
        row: usize,
    },
}

#[derive(Error, Debug)]
pub enum SpiralError {
    #[error("Matrix parsing failed: {0}")]
    MatrixError(#[from] MatrixError),

    #[error("Server returned error status: {status}")]
    ServerError { status: u16 },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Received an empty matrix")]
    EmptyMatrix,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SpiralError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SpiralError::ServerError { .. } | SpiralError::NetworkError(_) => ErrorCategory::Network,
            SpiralError::MatrixError(_)
            | SpiralError::EmptyMatrix
            | SpiralError::SerializationError(_) => ErrorCategory::Data,
            SpiralError::IoError(_) => ErrorCategory::Io,
            SpiralError::ConfigValidationError { .. }
            | SpiralError::InvalidConfigValueError { .. }
            | SpiralError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重試即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            SpiralError::ServerError { status } => *status >= 500 || *status == 429,
            SpiralError::NetworkError(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpiralError::ServerError { status } if *status >= 500 => {
                "The server is having trouble, try again later"
            }
            SpiralError::ServerError { .. } => "Check that the matrix URL is correct and accessible",
            SpiralError::NetworkError(_) => {
                "Check your network connection or increase --timeout-seconds"
            }
            SpiralError::MatrixError(MatrixError::ParseError { .. }) => {
                "Make sure every cell between '|' separators holds a base-10 integer"
            }
            SpiralError::MatrixError(MatrixError::ShapeError { .. }) => {
                "Make sure the matrix has as many columns as rows in every row"
            }
            SpiralError::EmptyMatrix => {
                "The source contained no data rows; pass --allow-empty to accept this"
            }
            SpiralError::IoError(_) => "Check that the file exists and the path is writable",
            SpiralError::SerializationError(_) => "Try the 'text' output format instead",
            SpiralError::ConfigValidationError { .. }
            | SpiralError::InvalidConfigValueError { .. }
            | SpiralError::MissingConfigError { .. } => {
                "Review the command line arguments or the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpiralError::ServerError { status } => {
                format!("The matrix server answered with HTTP {}", status)
            }
            SpiralError::NetworkError(e) if e.is_timeout() => {
                "Timed out while downloading the matrix".to_string()
            }
            SpiralError::NetworkError(_) => "Could not reach the matrix server".to_string(),
            SpiralError::MatrixError(e) => format!("The matrix text is malformed: {}", e),
            SpiralError::EmptyMatrix => "The matrix is empty".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpiralError>;
