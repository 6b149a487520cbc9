pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{FileMatrixSource, HttpMatrixSource, LocalStorage};
pub use crate::core::client::{get_matrix, get_matrix_safe};
pub use crate::core::engine::{run_configured, SpiralEngine};
pub use crate::core::parser::MatrixParser;
pub use crate::core::pipeline::MatrixPipeline;
pub use crate::core::spiral::SpiralTraverser;
pub use crate::domain::model::{Matrix, OutputFormat, SpiralReport};
pub use crate::utils::error::{MatrixError, Result, SpiralError};
