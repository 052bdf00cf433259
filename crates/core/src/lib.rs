pub mod catalog;
pub mod config;
pub mod error;
pub mod facade;
pub mod logging;
pub mod pagination;
pub mod render;
pub mod search;

pub use error::Result;
pub use facade::CatalogHandle;
