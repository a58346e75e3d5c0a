mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::AppState;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/cards", get(routes::catalog::list_cards))
        .route("/api/cards/{id}", get(routes::catalog::card_info))
        .route("/api/categories", get(routes::catalog::filter_cards))
        .route("/api/search", get(routes::catalog::search_cards))
        .route("/api/deck", get(routes::deck::get_deck))
        .route("/api/deck/add/{id}", get(routes::deck::add_card))
        .route("/api/deck/remove/{id}", get(routes::deck::remove_card))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut builder = ygodeck_sdk::AsyncYgoDeckSdk::builder();
    if let Ok(base) = std::env::var("YGODECK_API_BASE") {
        builder = builder.base_url(base);
    }
    let sdk = builder.build().await.expect("Failed to initialize YGOPRODeck SDK");

    let app = app(Arc::new(AppState { sdk }));

    let addr = std::env::var("YGODECK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
