//! In-memory constant store.
//!
//! The whole document is loaded once and never mutated. Lookups go through
//! id maps built at load time in catalog order, so when an id appears more
//! than once the entry listed last shadows the earlier ones.

use crate::error::{CodataError, Result};
use codata_api::CatalogStats;
use codata_api::models::{CatalogDocument, ConstantDefinition, ConstantInstance};
use std::collections::{BTreeSet, HashMap};
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct Catalog {
    version: Option<String>,
    definitions: Vec<ConstantDefinition>,
    definition_index: HashMap<String, usize>,
    /// Instance id -> (definition position, instance position)
    instance_index: HashMap<String, (usize, usize)>,
    instance_count: usize,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let document: CatalogDocument = serde_json::from_reader(BufReader::new(file))?;
        let catalog = Self::from_document(document)?;
        info!(
            "Loaded catalog {} ({} definitions, {} instances)",
            path.display(),
            catalog.definitions.len(),
            catalog.instance_count
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        let CatalogDocument {
            version,
            constants: definitions,
        } = document;

        let mut definition_index = HashMap::with_capacity(definitions.len());
        let mut instance_index = HashMap::new();
        let mut instance_count = 0;

        for (d, definition) in definitions.iter().enumerate() {
            if definition_index.insert(definition.id.clone(), d).is_some() {
                warn!("Duplicate definition id '{}', last entry wins", definition.id);
            }

            for (i, instance) in definition.instances.iter().enumerate() {
                let Some(latest) = instance.latest() else {
                    return Err(CodataError::Validation(format!(
                        "instance '{}' of definition '{}' has no versions",
                        instance.id, definition.id
                    )));
                };
                if latest.display_name().is_none() {
                    return Err(CodataError::Validation(format!(
                        "latest version of instance '{}' has neither `name` nor `name_en`",
                        instance.id
                    )));
                }
                if instance_index.insert(instance.id.clone(), (d, i)).is_some() {
                    warn!("Duplicate instance id '{}', last entry wins", instance.id);
                }
                instance_count += 1;
            }
        }

        Ok(Self {
            version,
            definitions,
            definition_index,
            instance_index,
            instance_count,
        })
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// All instances, definitions outer and instances inner.
    pub fn instances(&self) -> impl Iterator<Item = &ConstantInstance> + '_ {
        self.definitions.iter().flat_map(|d| d.instances.iter())
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    pub fn get_definition(&self, id: &str) -> Option<&ConstantDefinition> {
        self.definition_index
            .get(id)
            .map(|&d| &self.definitions[d])
    }

    pub fn get_instance(&self, id: &str) -> Option<&ConstantInstance> {
        self.instance_index
            .get(id)
            .map(|&(d, i)| &self.definitions[d].instances[i])
    }

    pub fn stats(&self) -> CatalogStats {
        let versions: BTreeSet<&str> = self
            .instances()
            .flat_map(|inst| inst.versions.iter().map(|v| v.version.as_str()))
            .collect();

        CatalogStats {
            version: self.version.clone(),
            definitions: self.definitions.len(),
            instances: self.instance_count,
            versions: versions.into_iter().map(str::to_string).collect(),
        }
    }
}
