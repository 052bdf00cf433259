use crate::view::InstanceRow;
use codata_api::CatalogService;
use codata_api::models::{SearchRequest, SearchResponse};
use codata_core::config::CodataConfig;
use codata_core::render::render_search;
use tabled::{Table, settings::Style};

fn execute(
    config: &CodataConfig,
    query: &str,
    page: i64,
    per_page: Option<usize>,
) -> Result<SearchResponse, Box<dyn std::error::Error>> {
    let handle = codata_runtime::build_default_service(config)?;
    let request = SearchRequest::new(query)
        .with_page(page)
        .with_per_page(per_page.unwrap_or(config.search.default_per_page));
    Ok(handle.search(&request)?)
}

pub fn run(
    config: &CodataConfig,
    query: &str,
    page: i64,
    per_page: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = execute(config, query, page, per_page)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.found == 0 {
        println!("No matches");
        return Ok(());
    }

    println!(
        "Found {} matches (page {} of {})",
        response.found, response.page, response.n_pages
    );
    if !response.is_empty() {
        let rows: Vec<_> = response
            .matches
            .iter()
            .map(InstanceRow::from_instance)
            .collect();
        println!("{}", Table::new(&rows).with(Style::psql()));
    }
    Ok(())
}

pub fn render(
    config: &CodataConfig,
    query: &str,
    page: i64,
    per_page: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = execute(config, query, page, per_page)?;
    println!("{}", render_search(&response));
    Ok(())
}
