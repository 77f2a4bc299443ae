//! Reference table loading for the resistance model.
//!
//! Provides two loading methods:
//! - `default_reference()` - Loads embedded tables compiled into the binary
//! - `load_reference(path)` - Loads custom tables from a file path

use anyhow::Result;
use std::path::Path;

use super::types::ReferenceData;

/// Default reference tables embedded in the binary at compile time.
/// These are loaded from `config/reference_data.toml`.
const DEFAULT_REFERENCE: &str = include_str!("../../config/reference_data.toml");

/// Load reference tables from a TOML file at the given path.
///
/// The file must carry all three table sections (`materials`, `impacts`,
/// `infill_multipliers`); partial overrides are not merged with the
/// embedded defaults.
pub fn load_reference(path: &Path) -> Result<ReferenceData> {
    let content = std::fs::read_to_string(path)?;
    let data: ReferenceData = toml::from_str(&content)?;
    Ok(data)
}

/// Get the default reference tables embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a build bug).
pub fn default_reference() -> ReferenceData {
    toml::from_str(DEFAULT_REFERENCE).expect("embedded reference_data.toml must be valid TOML")
}
