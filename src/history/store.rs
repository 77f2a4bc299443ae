use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::types::LogRecord;

/// Column header written once when the log file is created.
const HEADER: &str = "Timestamp,File,Material,Impact Level,Infill Density,Wall Count,Layer Height,Infill Pattern,Resistance Score,Impact Force,Verdict";

/// Append-only CSV log of analysis results.
///
/// The header row is written when the file is first created and never
/// repeated; rows are appended in analysis order. All operations are
/// synchronous.
pub struct ImpactLog {
    path: PathBuf,
}

impl ImpactLog {
    /// Create a log handle for the given path.
    ///
    /// Parent directories are created up front; the file itself is created
    /// lazily by the first append.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            // A bare file name has an empty parent.
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {:?}", parent))?;
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path this log writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first if the file is new.
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let row = record
            .to_fields()
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");

        if self.path.exists() {
            let mut file = OpenOptions::new()
                .append(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open impact log {:?}", self.path))?;
            writeln!(file, "{}", row)
                .with_context(|| format!("Failed to append to impact log {:?}", self.path))?;
            debug!("Appended row to impact log {:?}", self.path);
        } else {
            let content = format!("{}\n{}\n", HEADER, row);
            std::fs::write(&self.path, content)
                .with_context(|| format!("Failed to create impact log {:?}", self.path))?;
            info!("Created impact log at {:?}", self.path);
        }

        Ok(())
    }
}

/// Quote a CSV field if it contains a comma, quote, or newline.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
