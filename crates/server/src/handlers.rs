use crate::error::{HttpError, NOT_FOUND_BODY};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, Response};
use codata_api::CatalogStats;
use codata_api::models::{ConstantDefinition, ConstantInstance, SearchRequest, SearchResponse};
use codata_core::pagination::PageRequest;
use codata_core::render::{PageBody, render_page};
use serde::Deserialize;
use std::time::Instant;
use tracing::debug;

pub const API_HOME_BODY: &str = "API home page. Nothing to do here.";

/// Raw search parameters. Numbers stay strings here so that bad input
/// falls back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

impl SearchParams {
    fn to_request(&self, state: &AppState) -> SearchRequest {
        let paging = PageRequest::from_params(
            self.page.as_deref(),
            self.per_page.as_deref(),
            &state.settings,
        );
        SearchRequest::new(self.name.clone().unwrap_or_default())
            .with_page(paging.page)
            .with_per_page(paging.per_page)
    }
}

pub async fn api_home() -> &'static str {
    API_HOME_BODY
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

pub async fn get_definition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConstantDefinition>, HttpError> {
    Ok(Json(state.catalog.get_definition(&id)?))
}

pub async fn get_instance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConstantInstance>, HttpError> {
    Ok(Json(state.catalog.get_instance(&id)?))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, HttpError> {
    let request = params.to_request(&state);
    Ok(Json(state.catalog.search(&request)?))
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<CatalogStats>, HttpError> {
    Ok(Json(state.catalog.stats()?))
}

/// Search page. Results are rendered only once a `name` parameter is given.
pub async fn home_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let Some(name) = params.name.as_deref() else {
        return Html(render_page("", PageBody::Empty));
    };

    let request = params.to_request(&state);
    let html = match state.catalog.search(&request) {
        Ok(response) => render_page(name, PageBody::Results(&response)),
        Err(e) => render_page(name, PageBody::Error(&e.to_string())),
    };
    Html(html)
}

pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    debug!(
        "{} {} -> {} ({:?})",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
