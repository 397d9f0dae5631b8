//! HTML parser for catalog pages.
//!
//! Parsing is deliberately forgiving: missing elements degrade to empty
//! string fields, and a page with no product containers yields an empty list.
//! Nothing in here returns an error.

use crate::catalog::models::ProductRecord;
use crate::catalog::selectors;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Parses product records out of a catalog page.
///
/// Containers are visited in document order. `limit` caps the result at
/// exactly the first `limit` containers; `0` means unlimited.
pub fn parse_products(html: &str, limit: usize) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for container in document.select(&selectors::CONTAINER) {
        let record = parse_container(container);
        trace!("Parsed record: {:?}", record.title);
        records.push(record);

        if limit > 0 && records.len() >= limit {
            debug!("Reached item limit of {}", limit);
            break;
        }
    }

    debug!("Parsed {} records", records.len());
    records
}

/// Extracts the five fields from one product container.
fn parse_container(container: ElementRef) -> ProductRecord {
    let title_el = select_first(container, &[&selectors::TITLE, &selectors::TITLE_FALLBACK]);

    let title = title_el.map(text_of).unwrap_or_default();
    let url = title_el
        .and_then(|e| e.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_default();

    let price = chain_text(container, &[&selectors::PRICE, &selectors::PRICE_FALLBACK]);
    let description =
        chain_text(container, &[&selectors::DESCRIPTION, &selectors::DESCRIPTION_FALLBACK]);
    let reviews = chain_text(container, &[&selectors::REVIEWS, &selectors::REVIEWS_FALLBACK]);

    ProductRecord { title, price, description, reviews, url }
}

/// Tries each selector in order, returning the first matching element.
fn select_first<'a>(element: ElementRef<'a>, chain: &[&Selector]) -> Option<ElementRef<'a>> {
    chain.iter().find_map(|selector| element.select(selector).next())
}

/// Fallback-chain text lookup, defaulting to empty string.
fn chain_text(element: ElementRef, chain: &[&Selector]) -> String {
    select_first(element, chain).map(text_of).unwrap_or_default()
}

/// Collects an element's text, trimmed at both ends.
fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
