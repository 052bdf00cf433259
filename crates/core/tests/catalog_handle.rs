mod common;

use codata_api::models::SearchRequest;
use codata_api::{ApiError, CatalogService};
use codata_core::CatalogHandle;
use codata_core::catalog::Catalog;
use codata_core::config::SearchSettings;
use codata_core::search::SearchMode;
use codata_api::models::{CatalogDocument, Version};
use common::{definition, instance, sample_handle};

#[test]
fn test_unknown_ids_are_not_found() {
    let handle = sample_handle();
    for id in ["", "nope", "C", "SpeedOfLightInVacuum/extra"] {
        assert!(matches!(handle.get_definition(id), Err(ApiError::NotFound(_))));
        assert!(matches!(handle.get_instance(id), Err(ApiError::NotFound(_))));
    }
}

#[test]
fn test_definition_and_instance_ids_are_separate() {
    let handle = sample_handle();
    // "c" is an instance id, "PlanckConstant" a definition id.
    assert!(handle.get_definition("c").is_err());
    assert!(handle.get_instance("PlanckConstant").is_err());

    let def = handle.get_definition("PlanckConstant").unwrap();
    assert_eq!(def.instances.len(), 2);
    let inst = handle.get_instance("hbar").unwrap();
    assert_eq!(inst.display_name(), "reduced Planck constant");
}

#[test]
fn test_search_results_round_trip_through_fetch() {
    let handle = sample_handle();
    let response = handle.search(&SearchRequest::new("")).unwrap();
    assert_eq!(response.found, 5);
    for m in &response.matches {
        assert_eq!(&handle.get_instance(&m.id).unwrap(), m);
    }
}

#[test]
fn test_speed_of_light_scenario() {
    let document = CatalogDocument {
        version: None,
        constants: vec![definition(
            "SpeedOfLightInVacuum",
            vec![instance(
                "c",
                "m s^-1",
                vec![Version::new("2022", "speed of light in vacuum", "299792458")],
            )],
        )],
    };
    let handle = CatalogHandle::new(
        Catalog::from_document(document).unwrap(),
        SearchSettings::default(),
    );

    let hit = handle.search(&SearchRequest::new("speed light")).unwrap();
    assert_eq!(hit.found, 1);
    assert_eq!(hit.n_pages, 1);
    assert_eq!(hit.matches[0].id, "c");

    let miss = handle.search(&SearchRequest::new("zzz-no-match")).unwrap();
    assert_eq!(miss.found, 0);
    assert_eq!(miss.n_pages, 0);
    assert!(miss.matches.is_empty());
}

#[test]
fn test_per_page_one_with_three_matches() {
    let handle = sample_handle();
    // "u" hits "speed of light in vacuum", "reduced Planck constant"
    // and "electron mass in u".
    let request = SearchRequest::new("u").with_per_page(1);

    let page_two = handle.search(&request.clone().with_page(2)).unwrap();
    assert_eq!(page_two.found, 3);
    assert_eq!(page_two.n_pages, 3);
    assert_eq!(page_two.page, 2);
    assert_eq!(page_two.per_page, 1);
    assert_eq!(page_two.matches.len(), 1);
    assert_eq!(page_two.matches[0].id, "hbar");

    let page_five = handle.search(&request.with_page(5)).unwrap();
    assert_eq!(page_five.found, 3);
    assert_eq!(page_five.n_pages, 3);
    assert!(page_five.matches.is_empty());
}

#[test]
fn test_search_is_case_insensitive() {
    let handle = sample_handle();
    for query in ["planck", "electron mass", "Speed Light", "in"] {
        let lower = handle.search(&SearchRequest::new(query)).unwrap();
        let upper = handle
            .search(&SearchRequest::new(query.to_uppercase()))
            .unwrap();
        assert_eq!(lower.matches, upper.matches, "query {query}");
    }
}

#[test]
fn test_search_preserves_catalog_order() {
    let handle = sample_handle();
    let response = handle.search(&SearchRequest::new("constant")).unwrap();
    let ids: Vec<_> = response.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["h", "hbar"]);
}

#[test]
fn test_pattern_mode_errors_are_invalid_arguments() {
    let settings = SearchSettings {
        mode: SearchMode::Pattern,
        ..SearchSettings::default()
    };
    let handle = CatalogHandle::new(common::sample_catalog(), settings);

    let ok = handle.search(&SearchRequest::new("^electron mass$")).unwrap();
    assert_eq!(ok.found, 1);

    let err = handle.search(&SearchRequest::new("electron (")).unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[test]
fn test_terms_mode_treats_metacharacters_literally() {
    let handle = sample_handle();
    let response = handle.search(&SearchRequest::new("electron (")).unwrap();
    assert_eq!(response.found, 0);
}

#[test]
fn test_per_page_is_clamped_to_settings() {
    let settings = SearchSettings {
        max_per_page: 3,
        default_per_page: 2,
        ..SearchSettings::default()
    };
    let handle = CatalogHandle::new(common::sample_catalog(), settings);
    let response = handle
        .search(&SearchRequest::new("").with_per_page(100))
        .unwrap();
    assert_eq!(response.per_page, 3);
    assert_eq!(response.matches.len(), 3);
    assert_eq!(response.n_pages, 2);
}

#[test]
fn test_zero_per_page_uses_configured_default() {
    let settings = SearchSettings {
        default_per_page: 2,
        ..SearchSettings::default()
    };
    let handle = CatalogHandle::new(common::sample_catalog(), settings);
    let response = handle
        .search(&SearchRequest::new("").with_per_page(0))
        .unwrap();
    assert_eq!(response.per_page, 2);
    assert_eq!(response.matches.len(), 2);
    assert_eq!(response.n_pages, 3);
}

#[test]
fn test_stats() {
    let stats = sample_handle().stats().unwrap();
    assert_eq!(stats.version.as_deref(), Some("2022"));
    assert_eq!(stats.definitions, 4);
    assert_eq!(stats.instances, 5);
    assert_eq!(stats.versions, vec!["2018", "2022"]);
}
