use serde::Serialize;

use super::card::Card;

// ---------------------------------------------------------------------------
// PageInfo — Navigation metadata derived from a paginated view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PageInfo {
    pub total_pages: usize,
    pub current_page: usize,
    pub previous_page: usize,
    pub next_page: usize,
}

// ---------------------------------------------------------------------------
// CatalogPage — One rendered page of the catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogPage {
    pub cards: Vec<Card>,
    pub page_info: PageInfo,
    pub cards_per_page: usize,
}
