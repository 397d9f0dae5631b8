//! CSV export for parsed records.

use crate::catalog::ProductRecord;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Writes records to a CSV file, header row first.
///
/// Columns are `title,price,description,reviews,url`, rows in input order,
/// UTF-8 with standard CSV quoting. An empty slice is not an error: nothing
/// is written and the output file is left untouched.
pub fn save_csv(records: &[ProductRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if records.is_empty() {
        warn!("No items to save");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;

    for record in records {
        writer.serialize(record).context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    info!("Saved {} items to {}", records.len(), path.display());

    Ok(())
}
