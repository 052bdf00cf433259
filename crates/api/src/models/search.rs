use super::constant::ConstantInstance;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: usize = 20;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct SearchFilter {
    pub name: String,
}

/// A normalized search request. `page` is kept signed so that out-of-range
/// requests (zero or negative) reach pagination and yield an empty page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub name: String,
    pub page: i64,
    pub per_page: usize,
}

impl SearchRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub filter: SearchFilter,
    /// Total number of matches across all pages.
    pub found: usize,
    pub page: i64,
    pub per_page: usize,
    pub n_pages: usize,
    /// The matches on the requested page, in catalog order.
    pub matches: Vec<ConstantInstance>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.n_pages as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case_keys() {
        let response = SearchResponse {
            filter: SearchFilter {
                name: "light".into(),
            },
            found: 0,
            page: 1,
            per_page: 20,
            n_pages: 0,
            matches: vec![],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["filter"]["name"], "light");
        assert_eq!(value["perPage"], 20);
        assert_eq!(value["nPages"], 0);
        assert!(value["matches"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_request_defaults() {
        let request = SearchRequest::default();
        assert_eq!(request.name, "");
        assert_eq!(request.page, DEFAULT_PAGE);
        assert_eq!(request.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_response_schema_lists_wire_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(SearchResponse)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for key in ["filter", "found", "page", "perPage", "nPages", "matches"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }
}
