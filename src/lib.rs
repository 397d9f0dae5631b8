//! shopscrape - Small, polite product scraper for the webscraper.io test site.
//!
//! One GET, one parse, one CSV file: build a client with sensible headers and
//! a transient-failure retry policy, fetch the catalog page, extract product
//! records with fallback CSS selector chains, and write them out.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod export;

pub use catalog::{parse_products, CatalogClient, FetchError, PageFetcher, ProductRecord};
pub use config::Config;
