mod matcher;

pub use matcher::{NameMatcher, SearchMode};

use crate::catalog::Catalog;
use crate::error::Result;
use codata_api::models::ConstantInstance;

/// Scans instance display names (latest version) of a catalog.
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Matching instances in catalog order.
    pub fn find(&self, matcher: &NameMatcher) -> Vec<&'a ConstantInstance> {
        self.catalog
            .instances()
            .filter(|instance| matcher.is_match(instance.display_name()))
            .collect()
    }

    pub fn search(
        &self,
        query: &str,
        mode: SearchMode,
        max_pattern_len: usize,
    ) -> Result<Vec<&'a ConstantInstance>> {
        let matcher = NameMatcher::build(query, mode, max_pattern_len)?;
        let matches = self.find(&matcher);
        tracing::debug!("search '{}' ({:?}): {} matches", query, mode, matches.len());
        Ok(matches)
    }
}
