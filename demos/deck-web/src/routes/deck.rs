use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Json, Redirect};
use serde_json::{json, Value};
use tracing::info;
use ygodeck_sdk::AddOutcome;

use crate::error::AppError;
use crate::state::AppState;

const DECK_PATH: &str = "/api/deck";

/// GET /api/deck
pub async fn get_deck(State(state): State<Arc<AppState>>) -> Json<Value> {
    let deck = state.sdk.sdk().deck();
    let count = deck.len();
    Json(json!({ "data": deck, "count": count }))
}

/// GET /api/deck/add/:id
///
/// Add one copy of a card from the current catalog, then redirect to the
/// deck. A card already at the copy limit is left as is.
pub async fn add_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    match state.sdk.sdk().add_to_deck(&id)? {
        AddOutcome::Added { count } => info!(card_id = %id, count, "added to deck"),
        AddOutcome::LimitReached => info!(card_id = %id, "deck copy limit reached"),
    }
    Ok(Redirect::to(DECK_PATH))
}

/// GET /api/deck/remove/:id
pub async fn remove_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    if !state.sdk.sdk().remove_from_deck(&id)? {
        info!(card_id = %id, "card not in deck");
    }
    Ok(Redirect::to(DECK_PATH))
}
