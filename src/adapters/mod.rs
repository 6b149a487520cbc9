// Adapters layer: concrete implementations of the domain ports (http, file, storage).

pub mod file;
pub mod http;
pub mod storage;

pub use file::FileMatrixSource;
pub use http::HttpMatrixSource;
pub use storage::LocalStorage;
