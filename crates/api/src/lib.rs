pub mod catalog;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use catalog::{CatalogService, CatalogStats};
pub use error::{ApiError, ApiResult};
pub use models::*;
