use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, SpiralError};
use crate::utils::validation::{self, Validate};
use clap::Parser;

pub const DEFAULT_MATRIX_URL: &str =
    "https://raw.githubusercontent.com/avito-tech/python-trainee-assignment/main/matrix.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "spiral-matrix")]
#[command(about = "Fetch a bordered text matrix and print its counter-clockwise spiral")]
pub struct CliConfig {
    /// URL of the matrix text
    #[arg(long, default_value = DEFAULT_MATRIX_URL)]
    pub url: String,

    /// Read the matrix from a local file instead of the URL
    #[arg(long)]
    pub file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(long)]
    pub output_path: Option<String>,

    /// Accept a matrix without data rows
    #[arg(long)]
    pub allow_empty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MATRIX_URL.to_string(),
            file: None,
            config: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            format: OutputFormat::Text,
            output_path: None,
            allow_empty: false,
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> Option<&str> {
        // 指定檔案時忽略 URL
        match self.file {
            Some(_) => None,
            None => Some(self.url.as_str()),
        }
    }

    fn source_file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn allow_empty(&self) -> bool {
        self.allow_empty
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.file, self.source_url()) {
            (Some(file), _) => validation::validate_path("file", file)?,
            (None, Some(url)) => validation::validate_url("url", url)?,
            (None, None) => {
                return Err(SpiralError::MissingConfigError {
                    field: "url".to_string(),
                })
            }
        }

        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;

        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }

        Ok(())
    }
}
