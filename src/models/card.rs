use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card — One catalog entry as returned by the cardinfo endpoint
// ---------------------------------------------------------------------------

/// A single card record.
///
/// Spell and trap cards carry no `atk`, `def` or `level`, and many cards have
/// no archetype, so those fields are optional. Nested collections default to
/// empty when the upstream omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub type_field: String,
    #[serde(rename = "frameType", default)]
    pub frame_type: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    pub atk: Option<i64>,
    pub def: Option<i64>,
    pub level: Option<i64>,
    #[serde(default)]
    pub race: String,
    pub attribute: Option<String>,
    pub archetype: Option<String>,
    pub ygoprodeck_url: Option<String>,
    #[serde(default)]
    pub card_sets: Vec<CardSet>,
    #[serde(default)]
    pub card_images: Vec<CardImage>,
    #[serde(default)]
    pub card_prices: Vec<CardPrice>,
}

// ---------------------------------------------------------------------------
// Nested records
// ---------------------------------------------------------------------------

/// A print of the card in one product set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub set_name: String,
    pub set_code: String,
    #[serde(default)]
    pub set_rarity: String,
    #[serde(default)]
    pub set_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    pub id: u64,
    pub image_url: String,
    #[serde(default)]
    pub image_url_small: String,
    #[serde(default)]
    pub image_url_cropped: String,
}

/// Marketplace quotes. The upstream sends prices as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPrice {
    #[serde(default)]
    pub cardmarket_price: String,
    #[serde(default)]
    pub tcgplayer_price: String,
    #[serde(default)]
    pub ebay_price: String,
    #[serde(default)]
    pub amazon_price: String,
    #[serde(default)]
    pub coolstuffinc_price: String,
}

// ---------------------------------------------------------------------------
// CardResponse — The `{"data": [...]}` envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    pub data: Vec<Card>,
}

/// Parse a card identifier supplied as text (path segment, form field).
///
/// Identifiers are non-negative integers; surrounding whitespace is ignored.
pub fn parse_card_id(raw: &str) -> crate::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| crate::YgoError::InvalidIdentifier(raw.to_string()))
}
