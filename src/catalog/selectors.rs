//! CSS selectors for the webscraper.io e-commerce test site layout.
//!
//! All selectors live here so a markup change on the site means updating one
//! file. Fields are looked up through ordered fallback chains: the primary
//! selector is tried first, then progressively looser ones, and a field whose
//! chain matches nothing resolves to an empty string.

use scraper::Selector;
use std::sync::LazyLock;

/// Product container. One of these per product card.
pub static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.thumbnail").unwrap());

/// Title link, primary then fallback.
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.title").unwrap());
pub static TITLE_FALLBACK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Price, primary then fallback.
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h4.price").unwrap());
pub static PRICE_FALLBACK: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".price").unwrap());

/// Description, primary then fallback.
pub static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.description").unwrap());
pub static DESCRIPTION_FALLBACK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").unwrap());

/// Review count, primary then fallback.
pub static REVIEWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.ratings p.pull-right").unwrap());
pub static REVIEWS_FALLBACK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ratings").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selectors_parse() {
        // LazyLock panics on first deref if a selector is invalid; touch them all.
        let _ = &*CONTAINER;
        let _ = &*TITLE;
        let _ = &*TITLE_FALLBACK;
        let _ = &*PRICE;
        let _ = &*PRICE_FALLBACK;
        let _ = &*DESCRIPTION;
        let _ = &*DESCRIPTION_FALLBACK;
        let _ = &*REVIEWS;
        let _ = &*REVIEWS_FALLBACK;
    }
}
