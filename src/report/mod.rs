//! Console and JSON renderings of a scan report.
//!
//! Both are pure functions over the same `Report` value and must reflect
//! identical finding data.

use std::path::{Path, PathBuf};

use crate::models::Report;
use crate::utils::Result;

/// Print the report panel plus a closing tip or warning.
pub fn print_report(report: &Report) {
    println!("{}", report);

    if report.findings.is_empty() {
        println!("Tip: No patterns found, but always test trades with small amounts first!");
    } else {
        println!("Warning: At least one suspicious pattern detected! Investigate before trading!");
    }
}

/// Write the JSON rendering as `<address>_honeypot_report.json` under `dir`.
pub fn write_json(report: &Report, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report.file_name());
    let json = serde_json::to_string_pretty(report)?;

    std::fs::write(&path, json)?;

    tracing::info!("Report written to {:?}", path);

    Ok(path)
}
