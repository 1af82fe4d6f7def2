use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use babel_core::{page, Location};

use crate::server::state::AppState;
use crate::types::*;
use crate::Error;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// POST /api/search - Paginated search
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let page_number = request.page.max(1);
    let per_page = state.config().results_per_page as i64;
    let offset = (page_number as i64 - 1) * per_page;

    tracing::info!(text = %request.text, page = page_number, "searching");

    let library = state.library();
    let locations = library
        .search_paginated(&request.text, offset, per_page)
        .map_err(reject)?;

    let total = library.occurrence_count(&request.text);
    let total_pages = total.div_ceil(per_page as u64);

    Ok(Json(SearchResponse {
        query: request.text,
        total,
        page: page_number,
        total_pages,
        results: locations.iter().map(Location::to_string).collect(),
    }))
}

/// POST /api/browse - Read the page at an address
pub async fn browse(
    State(state): State<AppState>,
    Json(request): Json<BrowseRequest>,
) -> Result<Json<PageResponse>, (StatusCode, String)> {
    let location = Location::parse(&request.address).map_err(reject)?;

    tracing::info!(location = %location, "browsing");

    page_response(&state, location).map(Json)
}

/// GET /api/random - A uniformly random page
pub async fn random(
    State(state): State<AppState>,
) -> Result<Json<PageResponse>, (StatusCode, String)> {
    let location = Location::random();

    tracing::info!(location = %location, "random page");

    page_response(&state, location).map(Json)
}

/// GET /api/count - Claimed occurrence count for a text
pub async fn count(
    State(state): State<AppState>,
    Query(params): Query<CountParams>,
) -> Json<CountResponse> {
    let count = state.library().occurrence_count(&params.text);
    Json(CountResponse {
        text: params.text,
        count,
    })
}

fn page_response(
    state: &AppState,
    location: Location,
) -> Result<PageResponse, (StatusCode, String)> {
    let content = state.library().browse(&location).map_err(reject)?;
    let lines = page::layout(&content).split('\n').map(str::to_string).collect();

    Ok(PageResponse {
        next: location.next().to_string(),
        previous: location.previous().to_string(),
        location: location.to_string(),
        content,
        lines,
    })
}

fn reject(err: babel_core::Error) -> (StatusCode, String) {
    let err = Error::from(err);
    (StatusCode::from(&err), err.to_string())
}
