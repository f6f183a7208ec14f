// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run report output

pub mod formatter;

use crate::types::*;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;

/// Save report as pretty JSON
pub fn save_report<P: AsRef<Path>>(report: &FixReport, path: P) -> Result<()> {
    ReportFormatter::new(false).save(report, path)
}

/// Print report to console
pub fn print_report(report: &FixReport, verbose: bool) {
    ReportFormatter::new(verbose).print(report);
}
