//! Integration tests for the HTML parser and CSV export using fixture files.

use shopscrape::export::save_csv;
use shopscrape::{parse_products, ProductRecord};

const CATALOG_FIXTURE: &str = include_str!("fixtures/catalog_page.html");

#[test]
fn test_parse_catalog_fixture() {
    let records = parse_products(CATALOG_FIXTURE, 0);
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.title, "Asus VivoBook X4...");
    assert_eq!(first.price, "$295.99");
    assert!(first.description.starts_with("Asus VivoBook X441NA-GA190"));
    assert_eq!(first.reviews, "14 reviews");
    assert_eq!(first.url, "/test-sites/e-commerce/allinone/product/545");

    let second = &records[1];
    assert_eq!(second.title, "Lenovo Legion Y5...");
    assert_eq!(second.price, "$1178.99");
    assert_eq!(second.reviews, "11 reviews");
}

#[test]
fn test_parse_degraded_card_uses_fallbacks() {
    let records = parse_products(CATALOG_FIXTURE, 0);

    // Third card has no title class, no price, no ratings block.
    let third = &records[2];
    assert_eq!(third.title, "Bargain bin item");
    assert_eq!(third.url, "/test-sites/e-commerce/allinone/product/612");
    assert_eq!(third.price, "");
    assert_eq!(third.description, "No description available.");
    assert_eq!(third.reviews, "");
}

#[test]
fn test_parse_fixture_with_limit() {
    let records = parse_products(CATALOG_FIXTURE, 2);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Asus VivoBook X4...");
    assert_eq!(records[1].title, "Lenovo Legion Y5...");
}

#[test]
fn test_all_fields_trimmed() {
    for record in parse_products(CATALOG_FIXTURE, 0) {
        for field in
            [&record.title, &record.price, &record.description, &record.reviews, &record.url]
        {
            assert_eq!(field.trim(), field.as_str());
        }
    }
}

#[test]
fn test_fixture_to_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.csv");

    let records = parse_products(CATALOG_FIXTURE, 0);
    save_csv(&records, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["title", "price", "description", "reviews", "url"])
    );

    let read_back: Vec<ProductRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(read_back, records);
}
