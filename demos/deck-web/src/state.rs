/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The one SDK instance for the process. Holds the catalog snapshot and
    /// the deck; both are internally synchronized.
    pub sdk: ygodeck_sdk::AsyncYgoDeckSdk,
}
