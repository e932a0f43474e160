//! HTTP request handlers

use super::state::AppState;
use crate::aggregator::CatalogState;
use crate::error::ErrorSummary;
use crate::pokemon::{parse_display_id, PokemonSummary};
use crate::search::filter;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const LOGO_URL: &str = "https://raw.githubusercontent.com/PokeAPI/media/master/logo/pokeapi_256.png";

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Name or id fragment
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub instance_name: String,
    pub title: &'static str,
    pub description: &'static str,
    pub logo_url: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<'a> {
    pub status: &'static str,
    pub query: String,
    /// Records in the catalog
    pub total: usize,
    /// Records matching the query
    pub count: usize,
    pub results: Vec<PokemonSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorSummary>,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorSummary>,
}

fn unavailable(catalog: &CatalogState) -> Response {
    let body = StatusBody {
        status: catalog.status(),
        message: match catalog {
            CatalogState::Loading => "Catalog is still loading".to_string(),
            _ => "Catalog unavailable".to_string(),
        },
        error: catalog.error().map(ErrorSummary::from),
    };
    (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
}

fn client_error(code: StatusCode, message: String) -> Response {
    let body = StatusBody {
        status: "error",
        message,
        error: None,
    };
    (code, Json(body)).into_response()
}

/// Home handler
pub async fn index(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(HomeResponse {
        instance_name: state.instance_name().to_string(),
        title: "Welcome to Pokédex App",
        description: "This app uses the PokéAPI to display information about Pokémon. \
                      Browse the list of Pokémon, search for specific ones, and view detailed information.",
        logo_url: LOGO_URL,
        version: crate::VERSION,
    })
}

/// List handler, filtered by `q`
pub async fn list(State(state): State<AppState>, Query(params): Query<ListParams>) -> Response {
    let catalog = state.catalog.read().await;
    let query = params.q.unwrap_or_default();

    let records = catalog.records().unwrap_or_default();
    let matched = filter(records, &query);

    let response = ListResponse {
        status: catalog.status(),
        query,
        total: records.len(),
        count: matched.len(),
        results: matched.iter().map(|r| r.summary()).collect(),
        loaded_at: catalog.loaded_at(),
        error: catalog.error().map(ErrorSummary::from),
    };

    let code = match *catalog {
        CatalogState::Failed(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };

    (code, Json(response)).into_response()
}

/// Details handler; accepts `7`, `007` or `#007`
pub async fn details(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(number) = parse_display_id(&id) else {
        return client_error(StatusCode::BAD_REQUEST, format!("Invalid id: {}", id));
    };

    let catalog = state.catalog.read().await;
    let Some(records) = catalog.records() else {
        return unavailable(&catalog);
    };

    match records.iter().find(|r| r.number == number) {
        Some(record) => Json(record).into_response(),
        None => client_error(StatusCode::NOT_FOUND, format!("No entry with id {}", id)),
    }
}

/// Manual reload: runs a fresh aggregation and reports the new state
pub async fn reload(State(state): State<AppState>) -> Response {
    let next = state.reload().await;
    match next.records() {
        Some(records) => Json(serde_json::json!({
            "status": next.status(),
            "total": records.len(),
            "loaded_at": next.loaded_at(),
        }))
        .into_response(),
        None => unavailable(&next),
    }
}

/// Lookup metrics
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    Json(serde_json::json!({
        "catalog": catalog.status(),
        "metrics": state.metrics().snapshot(),
    }))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
