//! Data model for extracted product records.

use serde::{Deserialize, Serialize};

/// One product extracted from a catalog page.
///
/// Every field is a plain string; a selector that matched nothing leaves its
/// field empty rather than failing the record. Field declaration order is the
/// CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product title text
    pub title: String,
    /// Displayed price text (e.g. "$9.99")
    pub price: String,
    /// Short description text
    pub description: String,
    /// Review count text (e.g. "12 reviews")
    pub reviews: String,
    /// Product link href, as found in the page (may be relative)
    pub url: String,
}

impl ProductRecord {
    /// CSV header, matching field declaration order.
    pub const FIELDS: [&'static str; 5] = ["title", "price", "description", "reviews", "url"];

    /// Returns true when no selector matched anything for this record.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.price.is_empty()
            && self.description.is_empty()
            && self.reviews.is_empty()
            && self.url.is_empty()
    }
}
