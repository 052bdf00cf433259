use codata_core::CatalogHandle;
use codata_core::catalog::Catalog;
use codata_core::config::CodataConfig;

/// Loads the catalog named by `config` and wraps it in the standard handle.
///
/// The catalog is read once here; every later lookup and search shares the
/// same immutable copy.
pub fn build_default_service(config: &CodataConfig) -> codata_core::Result<CatalogHandle> {
    config.validate()?;
    let catalog = Catalog::load(&config.catalog_path).inspect_err(|e| {
        tracing::error!(
            "Failed to load catalog {}: {}",
            config.catalog_path.display(),
            e
        )
    })?;
    Ok(CatalogHandle::new(catalog, config.search.clone()))
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(codata_core::logging::init_logging(component, to_stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use codata_api::CatalogService;
    use codata_core::error::CodataError;
    use std::io::Write;

    const CATALOG: &str = r#"{"constants": [{"id": "G", "instances": [
        {"id": "G-1", "units": {"SI": "m^3 kg^-1 s^-2"}, "versions": [
            {"version": "2022", "name": "Newtonian constant of gravitation", "value": "6.67430e-11", "uncertainty": "0.00015e-11"}
        ]}
    ]}]}"#;

    #[test]
    fn test_build_from_config_file_settings() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("constants.json");
        std::fs::write(&catalog_path, CATALOG).unwrap();

        let config_path = dir.path().join("codata.json");
        let mut config_file = std::fs::File::create(&config_path).unwrap();
        write!(
            config_file,
            r#"{{"catalog_path": {:?}, "search": {{"default_per_page": 5}}}}"#,
            catalog_path.to_str().unwrap()
        )
        .unwrap();

        let config = CodataConfig::load_or_default(Some(&config_path)).unwrap();
        let handle = build_default_service(&config).unwrap();
        assert_eq!(config.search.default_per_page, 5);
        assert_eq!(handle.stats().unwrap().instances, 1);
        assert!(handle.get_instance("G-1").is_ok());
    }

    #[test]
    fn test_missing_catalog_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = CodataConfig {
            catalog_path: dir.path().join("absent.json"),
            ..CodataConfig::default()
        };
        assert!(matches!(
            build_default_service(&config),
            Err(CodataError::Io(_))
        ));
    }
}
