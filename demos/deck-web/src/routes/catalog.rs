use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Redirect, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use ygodeck_sdk::{paginate, CatalogPage, PageRequest, YgoError};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListCardsParams {
    pub nb_cartes: Option<String>,
    pub page: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// GET /api/cards?nb_cartes=20&page=2
///
/// Fetch the full catalog and return one page of it. Missing or non-numeric
/// paging parameters fall back to 20 cards on page 1.
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCardsParams>,
) -> Result<Json<CatalogPage>, AppError> {
    let request = PageRequest::from_query(params.page.as_deref(), params.nb_cartes.as_deref());
    let snapshot = state.sdk.load_all().await?;

    // Page the snapshot this request fetched, not whatever is current by now.
    let (cards, page_info) = paginate(&snapshot.cards, &request);
    Ok(Json(CatalogPage {
        cards: cards.to_vec(),
        page_info,
        cards_per_page: request.page_size(),
    }))
}

/// GET /api/cards/:id
pub async fn card_info(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let card = state.sdk.card_info(&id).await?;
    Ok(Json(json!({ "data": card })))
}

/// GET /api/categories?categorie=Normal+Monster&level=4&attribute=DARK
///
/// Keys may repeat. With no selection at all the client is sent back to the
/// full listing.
pub async fn filter_cards(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let mut categories = Vec::new();
    let mut levels = Vec::new();
    let mut attributes = Vec::new();
    for (key, value) in pairs {
        match key.as_str() {
            "categorie" => categories.push(value),
            "level" => levels.push(value),
            "attribute" => attributes.push(value),
            _ => {}
        }
    }

    let result = state
        .sdk
        .run(move |s| s.filter(&categories, &levels, &attributes))
        .await;
    let snapshot = match result {
        Err(YgoError::EmptyQuery(_)) => return Ok(Redirect::to("/api/cards").into_response()),
        other => other?,
    };

    let count = snapshot.len();
    Ok(Json(json!({ "data": snapshot.cards, "count": count, "query": snapshot.query })).into_response())
}

/// GET /api/search?query=magician
pub async fn search_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = params.query.unwrap_or_default();
    let snapshot = state.sdk.search(&query).await?;

    let count = snapshot.len();
    Ok(Json(json!({ "data": snapshot.cards, "count": count, "query": snapshot.query })))
}
