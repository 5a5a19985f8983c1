//! Catalog serialization and CLI output formatting.
//!
//! # Output Format
//!
//! ## Build summary
//!
//! ```text
//! Catalog
//!     Templates: 271
//!     Released: 248
//!     Pruned: 23
//!
//! Factions
//!     Neutral: 72
//!     Monster: 30
//!     Nilfgaard: 28
//!     Northern Realms: 31
//!     Scoiatael: 29
//!     Skellige: 30
//!     Syndicate: 28
//! ```
//!
//! # Architecture
//!
//! The summary has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects. File writing lives in
//! [`write_catalog`], which serializes the catalog as pretty-printed JSON
//! so published diffs stay reviewable.

use crate::card::Catalog;
use crate::transform::BuildReport;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the catalog to `path` as pretty-printed JSON.
///
/// Keys are already ordered (the catalog is a `BTreeMap` throughout), so the
/// same input always produces byte-identical output.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), OutputError> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Format the post-build summary: totals first, then per-faction counts.
pub fn format_build_summary(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Catalog".to_string());
    lines.push(format!("    Templates: {}", report.templates));
    lines.push(format!("    Released: {}", report.released));
    lines.push(format!("    Pruned: {}", report.pruned));

    lines.push(String::new());
    lines.push("Factions".to_string());
    for (label, count) in &report.faction_counts {
        lines.push(format!("    {}: {}", label, count));
    }

    lines
}

/// Print the build summary to stdout.
pub fn print_build_summary(report: &BuildReport) {
    for line in format_build_summary(report) {
        println!("{}", line);
    }
}
