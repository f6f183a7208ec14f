// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal and JSON rendering of fixer runs

use crate::i18n;
use crate::types::*;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub struct ReportFormatter {
    verbose: bool,
}

impl ReportFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print(&self, report: &FixReport) {
        if report.dry_run {
            println!("{}", "(dry run: no files written)".dimmed());
        }

        for outcome in &report.outcomes {
            self.print_outcome(outcome);
        }

        println!();
        println!(
            "{} {}  |  Skipped: {}  |  Failed: {}  |  Replacements: {}",
            if report.dry_run { "Would fix:" } else { "Fixed:" },
            report.fixed_count().to_string().green(),
            report.skipped_count(),
            report.failures().count().to_string().red(),
            report.total_replacements(),
        );
    }

    fn print_outcome(&self, outcome: &LocaleOutcome) {
        let label = match i18n::language_name(&outcome.language_code) {
            Some(name) => format!("{} → {} ({})", outcome.locale, outcome.language_code, name),
            None => format!("{} → {}", outcome.locale, outcome.language_code),
        };

        match &outcome.status {
            LocaleStatus::Fixed { replacements } => println!(
                "  {} {:<24} {} ({} replaced)",
                "FIXED".green().bold(),
                label,
                outcome.path.display(),
                replacements
            ),
            LocaleStatus::WouldFix { replacements } => println!(
                "  {} {:<24} {} ({} to replace)",
                "WOULD".yellow().bold(),
                label,
                outcome.path.display(),
                replacements
            ),
            LocaleStatus::Unchanged if self.verbose => println!(
                "  {} {:<24} {}",
                "OK".cyan(),
                label,
                outcome.path.display()
            ),
            LocaleStatus::Skipped if self.verbose => println!(
                "  {} {:<24} {} (not found)",
                "SKIP".dimmed(),
                label,
                outcome.path.display()
            ),
            LocaleStatus::Failed { error } => {
                eprintln!("  {} {:<24} {}", "FAIL".red().bold(), label, error)
            }
            _ => {}
        }
    }

    pub fn save<P: AsRef<Path>>(&self, report: &FixReport, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
