// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for terms-lang-fix
//!
//! The locale mapping is an ordered table of `(locale, language code)` pairs.
//! The locale selects the file (`terms-<locale>.html`); the language code is
//! what ends up in the `lang` attribute. The two are allowed to diverge.

use crate::encoding::TextEncoding;
use crate::i18n;
use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Directory holding the terms files, relative to the working directory
pub const DEFAULT_BASE_DIR: &str = "docs/terms";

/// Language code every source file carries before correction
pub const PLACEHOLDER_LANG: &str = "ro";

/// Built-in locale table, in processing order
pub const DEFAULT_LOCALES: &[(&str, &str)] = &[
    ("en", "en"),
    ("fr", "fr"),
    ("es", "es"),
    ("it", "it"),
    ("de", "de"),
];

/// One row of the locale table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleEntry {
    pub locale: String,
    pub language_code: String,
}

impl LocaleEntry {
    pub fn new(locale: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            language_code: language_code.into(),
        }
    }
}

/// Ordered locale → language code table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleMapping {
    entries: Vec<LocaleEntry>,
}

impl Default for LocaleMapping {
    fn default() -> Self {
        Self {
            entries: DEFAULT_LOCALES
                .iter()
                .map(|(locale, code)| LocaleEntry::new(*locale, *code))
                .collect(),
        }
    }
}

impl LocaleMapping {
    pub fn entries(&self) -> &[LocaleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.locale == locale)
    }

    /// Parse a `locale=code` pair as given on the command line
    pub fn parse_entry(raw: &str) -> Result<LocaleEntry> {
        let (locale, code) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("expected LOCALE=CODE, got '{}'", raw))?;
        let entry = LocaleEntry::new(locale.trim(), code.trim());
        validate_entry(&entry)?;
        Ok(entry)
    }

    /// Replace the language code of an existing locale in place, or append a
    /// new locale at the end of the table
    pub fn with_override(mut self, entry: LocaleEntry) -> Result<Self> {
        validate_entry(&entry)?;
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.locale == entry.locale)
        {
            Some(existing) => existing.language_code = entry.language_code,
            None => self.entries.push(entry),
        }
        Ok(self)
    }

    /// Restrict the table to the named locales, keeping table order
    pub fn only(self, locales: &[String]) -> Result<Self> {
        if let Some(unknown) = locales.iter().find(|l| self.get(l).is_none()) {
            bail!(
                "unknown locale '{}' (known: {})",
                unknown,
                self.entries
                    .iter()
                    .map(|e| e.locale.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Ok(Self {
            entries: self
                .entries
                .into_iter()
                .filter(|entry| locales.contains(&entry.locale))
                .collect(),
        })
    }
}

fn validate_entry(entry: &LocaleEntry) -> Result<()> {
    let locale = entry.locale.as_str();
    if locale.is_empty() {
        bail!("locale must not be empty");
    }
    if locale
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    {
        bail!("locale '{}' contains characters not allowed in a file name", locale);
    }
    if !i18n::is_valid_language_tag(&entry.language_code) {
        bail!(
            "'{}' is not a recognised language code for locale '{}'",
            entry.language_code,
            locale
        );
    }
    Ok(())
}

/// Settings for a single fixer run
#[derive(Debug, Clone)]
pub struct FixerConfig {
    pub base_dir: PathBuf,
    pub mapping: LocaleMapping,
    pub encoding: TextEncoding,
    /// Report what would change without writing
    pub dry_run: bool,
    /// Stop at the first failing locale
    pub fail_fast: bool,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            mapping: LocaleMapping::default(),
            encoding: TextEncoding::default(),
            dry_run: false,
            fail_fast: false,
        }
    }
}

/// What happened to one locale's file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocaleStatus {
    /// File rewritten
    Fixed { replacements: usize },
    /// Dry run: file would have been rewritten
    WouldFix { replacements: usize },
    /// No placeholder present, file left untouched
    Unchanged,
    /// No file for this locale
    Skipped,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleOutcome {
    pub locale: String,
    pub language_code: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: LocaleStatus,
}

impl LocaleOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, LocaleStatus::Failed { .. })
    }
}

/// Complete run report
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub created_at: String,
    pub base_dir: PathBuf,
    pub encoding: String,
    pub dry_run: bool,
    pub outcomes: Vec<LocaleOutcome>,
}

impl FixReport {
    pub fn fixed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.status,
                    LocaleStatus::Fixed { .. } | LocaleStatus::WouldFix { .. }
                )
            })
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == LocaleStatus::Skipped)
            .count()
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                LocaleStatus::Fixed { replacements } | LocaleStatus::WouldFix { replacements } => {
                    replacements
                }
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &LocaleOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_order() {
        let mapping = LocaleMapping::default();
        let locales: Vec<_> = mapping.entries().iter().map(|e| e.locale.as_str()).collect();
        assert_eq!(locales, vec!["en", "fr", "es", "it", "de"]);
        assert!(mapping
            .entries()
            .iter()
            .all(|e| e.locale == e.language_code));
    }

    #[test]
    fn parse_entry_accepts_region_subtag() {
        let entry = LocaleMapping::parse_entry("en=en-US").unwrap();
        assert_eq!(entry, LocaleEntry::new("en", "en-US"));
    }

    #[test]
    fn parse_entry_rejects_bad_input() {
        assert!(LocaleMapping::parse_entry("fr").is_err());
        assert!(LocaleMapping::parse_entry("=fr").is_err());
        assert!(LocaleMapping::parse_entry("fr=xx").is_err());
        assert!(LocaleMapping::parse_entry("../fr=fr").is_err());
    }

    #[test]
    fn override_replaces_in_place() {
        let mapping = LocaleMapping::default()
            .with_override(LocaleEntry::new("fr", "fr-CA"))
            .unwrap();
        assert_eq!(mapping.len(), 5);
        assert_eq!(mapping.entries()[1], LocaleEntry::new("fr", "fr-CA"));
    }

    #[test]
    fn override_appends_new_locale() {
        let mapping = LocaleMapping::default()
            .with_override(LocaleEntry::new("pt", "pt-BR"))
            .unwrap();
        assert_eq!(mapping.len(), 6);
        assert_eq!(mapping.entries()[5].locale, "pt");
    }

    #[test]
    fn only_keeps_table_order() {
        let mapping = LocaleMapping::default()
            .only(&["de".to_string(), "en".to_string()])
            .unwrap();
        let locales: Vec<_> = mapping.entries().iter().map(|e| e.locale.as_str()).collect();
        assert_eq!(locales, vec!["en", "de"]);
    }

    #[test]
    fn only_rejects_unknown_locale() {
        let err = LocaleMapping::default()
            .only(&["pl".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("unknown locale 'pl'"));
    }

    #[test]
    fn status_serializes_with_tag() {
        let json = serde_json::to_string(&LocaleStatus::Fixed { replacements: 2 }).unwrap();
        assert_eq!(json, r#"{"status":"fixed","replacements":2}"#);
    }
}
