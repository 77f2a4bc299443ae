use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Read a toolpath file into memory.
///
/// G-code is plain text and the interesting metadata lives in comment
/// lines, so the whole file is read and handed to extraction as-is.
pub fn read_toolpath(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read G-code file {:?}", path))?;

    debug!("Read {} bytes of G-code from {:?}", content.len(), path);
    Ok(content)
}
