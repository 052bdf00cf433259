use crate::ShowTarget;
use codata_api::CatalogService;
use codata_core::config::CodataConfig;

pub fn run(config: &CodataConfig, target: &ShowTarget) -> Result<(), Box<dyn std::error::Error>> {
    let handle = codata_runtime::build_default_service(config)?;
    let json = match target {
        ShowTarget::Definition { id } => serde_json::to_string_pretty(&handle.get_definition(id)?)?,
        ShowTarget::Instance { id } => serde_json::to_string_pretty(&handle.get_instance(id)?)?,
    };
    println!("{}", json);
    Ok(())
}

pub fn stats(config: &CodataConfig) -> Result<(), Box<dyn std::error::Error>> {
    let handle = codata_runtime::build_default_service(config)?;
    println!("{}", serde_json::to_string_pretty(&handle.stats()?)?);
    Ok(())
}
