use crate::catalog::Catalog;
use crate::config::SearchSettings;
use crate::pagination::paginate;
use crate::search::SearchEngine;
use codata_api::models::{
    ConstantDefinition, ConstantInstance, SearchFilter, SearchRequest, SearchResponse,
};
use codata_api::{ApiError, ApiResult, CatalogService, CatalogStats};
use std::sync::Arc;

/// Cheap-to-clone handle over a loaded catalog, implementing the API traits.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    catalog: Arc<Catalog>,
    settings: SearchSettings,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog, settings: SearchSettings) -> Self {
        Self::from_shared(Arc::new(catalog), settings)
    }

    pub fn from_shared(catalog: Arc<Catalog>, settings: SearchSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

impl CatalogService for CatalogHandle {
    fn get_definition(&self, id: &str) -> ApiResult<ConstantDefinition> {
        self.catalog
            .get_definition(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("ConstantDefinition '{}'", id)))
    }

    fn get_instance(&self, id: &str) -> ApiResult<ConstantInstance> {
        self.catalog
            .get_instance(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("ConstantInstance '{}'", id)))
    }

    fn search(&self, request: &SearchRequest) -> ApiResult<SearchResponse> {
        let per_page = match request.per_page {
            0 => self.settings.default_per_page,
            n => n,
        }
        .clamp(1, self.settings.max_per_page.max(1));

        let matches = SearchEngine::new(&self.catalog).search(
            &request.name,
            self.settings.mode,
            self.settings.max_pattern_len,
        )?;
        let page = paginate(&matches, request.page, per_page);

        Ok(SearchResponse {
            filter: SearchFilter {
                name: request.name.clone(),
            },
            found: matches.len(),
            page: request.page,
            per_page,
            n_pages: page.total_pages,
            matches: page.items.iter().map(|&m| m.clone()).collect(),
        })
    }

    fn stats(&self) -> ApiResult<CatalogStats> {
        Ok(self.catalog.stats())
    }
}
