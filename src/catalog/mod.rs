//! Catalog page fetching and parsing.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{CatalogClient, FetchError, PageFetcher, DEFAULT_USER_AGENT};
pub use models::ProductRecord;
pub use parser::parse_products;
