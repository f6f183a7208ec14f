// SPDX-License-Identifier: PMPL-1.0-or-later

//! terms-lang-fix: rewrite the placeholder `lang="ro"` in per-locale terms pages

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use terms_lang_fix::encoding::TextEncoding;
use terms_lang_fix::fixer;
use terms_lang_fix::report;
use terms_lang_fix::types::*;

#[derive(Parser)]
#[command(name = "terms-lang-fix")]
#[command(version)]
#[command(about = "Replace the placeholder lang attribute in per-locale terms HTML files")]
#[command(long_about = None)]
struct Cli {
    /// Directory containing terms-<locale>.html files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Text encoding used to read and write the files
    #[arg(short, long, value_name = "LABEL", default_value = "utf-8")]
    encoding: String,

    /// Override or add a locale mapping (repeatable)
    #[arg(short, long = "map", value_name = "LOCALE=CODE")]
    maps: Vec<String>,

    /// Only process these locales
    #[arg(short, long = "locale", value_name = "LOCALE", value_delimiter = ',')]
    locales: Vec<String>,

    /// Report what would change without writing
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Stop at the first failing locale
    #[arg(long)]
    fail_fast: bool,

    /// Write a JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the summary
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<FixerConfig> {
        let mut mapping = LocaleMapping::default();
        for raw in &self.maps {
            mapping = mapping.with_override(LocaleMapping::parse_entry(raw)?)?;
        }
        if !self.locales.is_empty() {
            mapping = mapping.only(&self.locales)?;
        }

        Ok(FixerConfig {
            base_dir: self.base_dir,
            mapping,
            encoding: TextEncoding::for_label(&self.encoding)?,
            dry_run: self.dry_run,
            fail_fast: self.fail_fast,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    let quiet = cli.quiet;
    let output = cli.output.clone();
    let config = cli.into_config()?;

    if verbose {
        println!(
            "Fixing {} locale(s) in {} ({})",
            config.mapping.len(),
            config.base_dir.display(),
            config.encoding
        );
    }
    if !quiet {
        let problem = match std::fs::metadata(&config.base_dir) {
            Ok(meta) if meta.is_dir() => None,
            Ok(_) => Some("is not a directory".to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Some("not found, nothing to fix".to_string())
            }
            Err(e) => Some(format!("cannot be inspected ({})", e)),
        };
        if let Some(problem) = problem {
            eprintln!(
                "{} base directory {} {}",
                "warning:".yellow(),
                config.base_dir.display(),
                problem
            );
        }
    }

    let report = fixer::run(&config);

    if !quiet {
        report::print_report(&report, verbose);
    }
    if let Some(path) = output {
        report::save_report(&report, &path)?;
        if verbose {
            println!("Report saved to: {}", path.display());
        }
    }

    if report.has_failures() {
        let failed: Vec<String> = report
            .failures()
            .filter_map(|o| match &o.status {
                LocaleStatus::Failed { error } => Some(format!("  {}: {}", o.locale, error)),
                _ => None,
            })
            .collect();
        return Err(anyhow!(
            "{} locale(s) failed:\n{}",
            failed.len(),
            failed.join("\n")
        ));
    }
    Ok(())
}
