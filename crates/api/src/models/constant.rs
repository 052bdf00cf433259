use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Source fields a record carries beyond the ones the catalog interprets.
/// They are kept in document order and written back out unchanged.
pub type ExtraFields = IndexMap<String, serde_json::Value>;

/// Unit-map key holding the SI symbol of an instance.
pub const UNIT_SI: &str = "SI";
/// Unit-map key holding a unit-of-measure reference URL.
pub const UNIT_UOM: &str = "UOM";

/// Top-level shape of the static constants document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, JsonSchema)]
pub struct CatalogDocument {
    #[serde(default, deserialize_with = "label::deserialize_opt")]
    #[schemars(with = "Option<String>")]
    pub version: Option<String>,
    #[serde(default)]
    pub constants: Vec<ConstantDefinition>,
}

/// A named physical constant grouping one or more measured instances.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct ConstantDefinition {
    pub id: String,
    #[serde(default)]
    pub instances: Vec<ConstantInstance>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A measured realization of a constant with its units and version history.
///
/// `versions` is ordered newest first; the catalog loader rejects instances
/// without any version.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct ConstantInstance {
    pub id: String,
    #[serde(default)]
    pub units: IndexMap<String, String>,
    #[serde(default)]
    pub versions: Vec<Version>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ConstantInstance {
    pub fn latest(&self) -> Option<&Version> {
        self.versions.first()
    }

    /// Display name of the latest version, empty when there is none.
    pub fn display_name(&self) -> &str {
        self.latest()
            .and_then(Version::display_name)
            .unwrap_or_default()
    }

    pub fn si_unit(&self) -> Option<&str> {
        self.units.get(UNIT_SI).map(String::as_str)
    }

    pub fn uom_reference(&self) -> Option<&str> {
        self.units
            .get(UNIT_UOM)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// One historical measurement record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct Version {
    #[serde(deserialize_with = "label::deserialize")]
    #[schemars(with = "String")]
    pub version: String,
    /// Display name. Documents spell it `name`, `name_en`, or carry both;
    /// whichever fields are present are written back out as read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    pub value: String,
    #[serde(default)]
    pub uncertainty: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Version {
    pub fn new(version: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            name: Some(name.into()),
            name_en: None,
            value: value.into(),
            uncertainty: None,
            extra: ExtraFields::new(),
        }
    }

    /// `name` when present, otherwise `name_en`.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.name_en.as_deref())
    }

    pub fn with_uncertainty(mut self, uncertainty: impl Into<String>) -> Self {
        self.uncertainty = Some(uncertainty.into());
        self
    }
}

/// Version labels are strings, but documents produced by older exports
/// write release years as bare numbers.
mod label {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(serde_json::Number),
    }

    impl From<Label> for String {
        fn from(label: Label) -> Self {
            match label {
                Label::Text(s) => s,
                Label::Number(n) => n.to_string(),
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Label::deserialize(deserializer).map(String::from)
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Label>::deserialize(deserializer).map(|l| l.map(String::from))
    }
}
