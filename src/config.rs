use std::time::Duration;

pub const API_BASE: &str = "https://db.ygoprodeck.com/api/v7";
pub const CARDINFO_PATH: &str = "cardinfo.php";

/// Cards shown per page when the caller gives no usable page size.
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_PAGE_NUMBER: usize = 1;

/// Copies of one card identifier allowed in the deck.
pub const MAX_COPIES: usize = 3;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn cardinfo_url(base: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), CARDINFO_PATH)
}
