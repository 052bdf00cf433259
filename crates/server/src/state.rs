use codata_api::CatalogService;
use codata_core::CatalogHandle;
use codata_core::config::SearchSettings;
use std::sync::Arc;

/// Shared, read-only context handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub settings: Arc<SearchSettings>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>, settings: SearchSettings) -> Self {
        Self {
            catalog,
            settings: Arc::new(settings),
        }
    }
}

impl From<CatalogHandle> for AppState {
    fn from(handle: CatalogHandle) -> Self {
        let settings = handle.settings().clone();
        Self::new(Arc::new(handle), settings)
    }
}
