pub mod client;
pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod spiral;

pub use crate::domain::model::{Matrix, OutputFormat, SpiralReport};
pub use crate::domain::ports::{ConfigProvider, MatrixSource, Pipeline, Storage};
pub use crate::utils::error::Result;
