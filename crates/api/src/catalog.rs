use crate::error::ApiResult;
use crate::models::{ConstantDefinition, ConstantInstance, SearchRequest, SearchResponse};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogStats {
    /// Release label of the loaded document, when it carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub definitions: usize,
    pub instances: usize,
    /// Distinct version labels across all instances, sorted.
    pub versions: Vec<String>,
}

/// Read-only access to a loaded constants catalog.
///
/// Every method works on immutable in-memory data, so implementations are
/// shared across request tasks without locking.
pub trait CatalogService: Send + Sync {
    fn get_definition(&self, id: &str) -> ApiResult<ConstantDefinition>;

    fn get_instance(&self, id: &str) -> ApiResult<ConstantInstance>;

    /// Match instances by display name and cut the requested page.
    fn search(&self, request: &SearchRequest) -> ApiResult<SearchResponse>;

    fn stats(&self) -> ApiResult<CatalogStats>;
}
