#![allow(dead_code)]

use codata_api::models::{CatalogDocument, ConstantDefinition, ConstantInstance, Version};
use codata_core::CatalogHandle;
use codata_core::catalog::Catalog;
use codata_core::config::SearchSettings;

pub fn instance(id: &str, si: &str, versions: Vec<Version>) -> ConstantInstance {
    let mut instance = ConstantInstance {
        id: id.to_string(),
        units: Default::default(),
        versions,
        extra: Default::default(),
    };
    if !si.is_empty() {
        instance.units.insert("SI".to_string(), si.to_string());
    }
    instance
}

pub fn definition(id: &str, instances: Vec<ConstantInstance>) -> ConstantDefinition {
    ConstantDefinition {
        id: id.to_string(),
        instances,
        extra: Default::default(),
    }
}

/// Four definitions, five instances, in this catalog order:
/// speed of light, Planck constant, reduced Planck constant,
/// electron mass, electron mass in u.
pub fn sample_document() -> CatalogDocument {
    CatalogDocument {
        version: Some("2022".to_string()),
        constants: vec![
            definition(
                "SpeedOfLightInVacuum",
                vec![instance(
                    "c",
                    "m s^-1",
                    vec![
                        Version::new("2022", "speed of light in vacuum", "299792458"),
                        Version::new("2018", "speed of light in vacuum", "299792458")
                            .with_uncertainty("0"),
                    ],
                )],
            ),
            definition(
                "PlanckConstant",
                vec![
                    instance(
                        "h",
                        "J Hz^-1",
                        vec![Version::new("2022", "Planck constant", "6.62607015e-34")],
                    ),
                    instance(
                        "hbar",
                        "J s",
                        vec![Version::new(
                            "2022",
                            "reduced Planck constant",
                            "1.054571817e-34",
                        )],
                    ),
                ],
            ),
            definition(
                "ElectronMass",
                vec![
                    instance(
                        "m_e",
                        "kg",
                        vec![
                            Version::new("2022", "electron mass", "9.1093837139e-31")
                                .with_uncertainty("0.0000000028e-31"),
                        ],
                    ),
                    instance(
                        "m_e_u",
                        "u",
                        vec![
                            Version::new("2022", "electron mass in u", "5.485799090441e-4")
                                .with_uncertainty("0.000000000097e-4"),
                        ],
                    ),
                ],
            ),
            definition("EmptyDefinition", vec![]),
        ],
    }
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_document(sample_document()).expect("sample catalog is valid")
}

pub fn sample_handle() -> CatalogHandle {
    CatalogHandle::new(sample_catalog(), SearchSettings::default())
}
