//! Suggestion payload types
//!
//! Mirrors the wire format of `GET /market/search/suggestions/`:
//! `{"suggestions": [{"type": "...", "name": "...", "category": ..., "url": "..."}]}`

use serde::Deserialize;

/// What a suggestion row points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Product,
    Category,
}

impl SuggestionKind {
    /// Glyph shown in front of the row: a box for products, a folder
    /// marker for categories
    pub fn icon(&self) -> &'static str {
        match self {
            SuggestionKind::Product => "□",
            SuggestionKind::Category => "▸",
        }
    }
}

/// A single autocomplete result from the search backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub url: String,
}

impl Suggestion {
    /// Category line under the name; the backend sends null for
    /// category-type rows
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Category")
    }
}

/// Top-level response body of the suggestion endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsPayload {
    pub suggestions: Vec<Suggestion>,
}
