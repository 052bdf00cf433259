use codata_api::models::ConstantInstance;
use codata_core::render::NO_UNCERTAINTY;
use tabled::Tabled;

/// A terminal view of one search match (latest version).
#[derive(Tabled)]
pub struct InstanceRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Units")]
    pub units: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Uncertainty")]
    pub uncertainty: String,
    #[tabled(rename = "Version")]
    pub version: String,
    #[tabled(rename = "Id")]
    pub id: String,
}

impl InstanceRow {
    pub fn from_instance(instance: &ConstantInstance) -> Self {
        let latest = instance.latest();
        Self {
            name: instance.display_name().to_string(),
            units: instance.si_unit().unwrap_or("-").to_string(),
            value: latest.map(|v| v.value.clone()).unwrap_or_default(),
            uncertainty: latest
                .and_then(|v| v.uncertainty.clone())
                .unwrap_or_else(|| NO_UNCERTAINTY.to_string()),
            version: latest.map(|v| v.version.clone()).unwrap_or_default(),
            id: instance.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codata_api::models::Version;

    #[test]
    fn test_row_from_instance() {
        let instance = ConstantInstance {
            id: "c".to_string(),
            units: Default::default(),
            versions: vec![
                Version::new("2022", "speed of light in vacuum", "299792458"),
                Version::new("2018", "speed of light in vacuum", "299792458").with_uncertainty("0"),
            ],
            extra: Default::default(),
        };
        let row = InstanceRow::from_instance(&instance);
        assert_eq!(row.name, "speed of light in vacuum");
        assert_eq!(row.units, "-");
        assert_eq!(row.uncertainty, "-");
        assert_eq!(row.version, "2022");
    }
}
