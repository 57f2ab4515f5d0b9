use crate::domain::tables::{PricingTables, TablesOverrides};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Loads pricing tables from a TOML file.
///
/// The file overrides the built-in tables: keyed sections merge entry by
/// entry, `[rates]` and `[minimums]` replace the defaults as a whole.
pub fn load(path: impl AsRef<Path>) -> Result<PricingTables> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let tables = parse(&contents)?;
    tracing::info!(path = %path.display(), "loaded pricing tables");
    Ok(tables)
}

/// Parses and validates a TOML pricing-tables document.
pub fn parse(contents: &str) -> Result<PricingTables> {
    let overrides: TablesOverrides = toml::from_str(contents)?;
    let tables = PricingTables::default().with_overrides(overrides);
    tables.validate()?;
    Ok(tables)
}
