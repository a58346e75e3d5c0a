//! Catalog filter specifications and the builder that produces them.
//!
//! Every value ends up as a query parameter handed to the HTTP client, which
//! URL-encodes it; nothing is interpolated into the URL by hand.
//!
//! # Example
//!
//! ```rust
//! use ygodeck_sdk::FilterBuilder;
//! let spec = FilterBuilder::new()
//!     .category("Normal Monster")
//!     .level("4")
//!     .attribute("LIGHT")
//!     .build()
//!     .unwrap();
//! assert_eq!(spec.query_pairs().len(), 3);
//! ```

use serde::Serialize;

use crate::error::{Result, YgoError};
use crate::models::parse_card_id;

// ---------------------------------------------------------------------------
// FilterSpec
// ---------------------------------------------------------------------------

/// What to ask the catalog for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FilterSpec {
    /// The full catalog.
    #[default]
    All,
    /// A single card by identifier.
    ById { id: String },
    /// Fuzzy name search.
    ByQuery { query: String },
    /// Category/level/attribute selections.
    ByFilters {
        categories: Vec<String>,
        levels: Vec<String>,
        attributes: Vec<String>,
    },
}

impl FilterSpec {
    /// Filter for one card. The identifier must be numeric.
    pub fn by_id(raw: &str) -> Result<Self> {
        let id = parse_card_id(raw)?;
        Ok(FilterSpec::ById { id: id.to_string() })
    }

    /// Name search. A blank query is rejected rather than widened to the
    /// full catalog.
    pub fn search(query: &str) -> Result<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(YgoError::EmptyQuery("search term is required".into()));
        }
        Ok(FilterSpec::ByQuery {
            query: query.to_string(),
        })
    }

    /// Query parameters for the cardinfo endpoint, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            FilterSpec::All => Vec::new(),
            FilterSpec::ById { id } => vec![("id", id.clone())],
            FilterSpec::ByQuery { query } => vec![("fname", query.clone())],
            FilterSpec::ByFilters {
                categories,
                levels,
                attributes,
            } => {
                let mut pairs = Vec::with_capacity(categories.len() + levels.len() + attributes.len());
                pairs.extend(categories.iter().map(|c| ("type", c.clone())));
                pairs.extend(levels.iter().map(|l| ("level", l.clone())));
                pairs.extend(attributes.iter().map(|a| ("attribute", a.clone())));
                pairs
            }
        }
    }
}

// ---------------------------------------------------------------------------
// FilterBuilder
// ---------------------------------------------------------------------------

/// Collects category/level/attribute selections.
///
/// Blank tokens are ignored. Methods return `&mut Self` for chaining.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    categories: Vec<String>,
    levels: Vec<String>,
    attributes: Vec<String>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card type selection (e.g. `"Effect Monster"`).
    pub fn category(&mut self, value: &str) -> &mut Self {
        push_token(&mut self.categories, value);
        self
    }

    /// Add a level selection.
    pub fn level(&mut self, value: &str) -> &mut Self {
        push_token(&mut self.levels, value);
        self
    }

    /// Add an attribute selection (e.g. `"DARK"`).
    pub fn attribute(&mut self, value: &str) -> &mut Self {
        push_token(&mut self.attributes, value);
        self
    }

    pub fn categories<S: AsRef<str>>(&mut self, values: &[S]) -> &mut Self {
        for v in values {
            self.category(v.as_ref());
        }
        self
    }

    pub fn levels<S: AsRef<str>>(&mut self, values: &[S]) -> &mut Self {
        for v in values {
            self.level(v.as_ref());
        }
        self
    }

    pub fn attributes<S: AsRef<str>>(&mut self, values: &[S]) -> &mut Self {
        for v in values {
            self.attribute(v.as_ref());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.levels.is_empty() && self.attributes.is_empty()
    }

    /// Produce the filter spec.
    ///
    /// Returns [`YgoError::EmptyQuery`] when nothing was selected; callers
    /// treat that as "no filter" instead of fetching the whole catalog.
    pub fn build(&self) -> Result<FilterSpec> {
        if self.is_empty() {
            return Err(YgoError::EmptyQuery(
                "at least one category, level or attribute is required".into(),
            ));
        }
        Ok(FilterSpec::ByFilters {
            categories: self.categories.clone(),
            levels: self.levels.clone(),
            attributes: self.attributes.clone(),
        })
    }
}

fn push_token(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        list.push(value.to_string());
    }
}
