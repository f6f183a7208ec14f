// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tag fixer
//!
//! For every entry of the locale table, resolves `terms-<locale>.html` under
//! the base directory and rewrites each `lang="ro"` into the entry's language
//! code. Missing files are skipped. Files without the placeholder are not
//! written at all, which keeps a second run a no-op.

use crate::encoding::TextEncoding;
use crate::types::{
    FixReport, FixerConfig, LocaleEntry, LocaleOutcome, LocaleStatus, PLACEHOLDER_LANG,
};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path of the terms file for `locale`.
///
/// Only the locale key takes part; the mapped language code never does.
pub fn target_path(base_dir: &Path, locale: &str) -> PathBuf {
    base_dir.join(format!("terms-{}.html", locale))
}

fn lang_attribute(code: &str) -> String {
    format!("lang=\"{}\"", code)
}

/// Replace every non-overlapping `lang="ro"` in `content`.
///
/// Returns the new content and the number of replacements made.
pub fn replace_placeholder(content: &str, language_code: &str) -> (String, usize) {
    let needle = lang_attribute(PLACEHOLDER_LANG);
    let count = content.matches(needle.as_str()).count();
    if count == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(&needle, &lang_attribute(language_code)), count)
}

/// Result of rewriting one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChange {
    Rewritten(usize),
    /// Dry run: nothing written
    Pending(usize),
    Untouched,
    /// No file at the path
    Missing,
}

/// Read, substitute and write back a single file.
///
/// Only `NotFound` counts as a missing file; any other error opening the
/// path is returned.
pub fn fix_file(
    path: &Path,
    language_code: &str,
    encoding: TextEncoding,
    dry_run: bool,
) -> Result<FileChange> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileChange::Missing),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let content = encoding
        .decode(&raw)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let (updated, replacements) = replace_placeholder(&content, language_code);
    if replacements == 0 {
        return Ok(FileChange::Untouched);
    }
    if dry_run {
        return Ok(FileChange::Pending(replacements));
    }

    let bytes = encoding
        .encode(&updated)
        .with_context(|| format!("failed to encode {}", path.display()))?;
    write_atomic(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(FileChange::Rewritten(replacements))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "terms".to_string());
    tmp.set_file_name(format!(".{}.tmp", file_name));
    tmp
}

/// Write through a sibling temp file and rename it over `path`, so a failed
/// write never leaves a truncated page behind.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = tmp_path(path);
    let permissions = fs::metadata(path)?.permissions();

    let result = fs::write(&tmp, bytes)
        .and_then(|_| fs::set_permissions(&tmp, permissions))
        .and_then(|_| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Process one table entry. Errors are captured in the outcome.
pub fn fix_locale(config: &FixerConfig, entry: &LocaleEntry) -> LocaleOutcome {
    let path = target_path(&config.base_dir, &entry.locale);

    let status = match fix_file(&path, &entry.language_code, config.encoding, config.dry_run) {
        Ok(FileChange::Rewritten(replacements)) => LocaleStatus::Fixed { replacements },
        Ok(FileChange::Pending(replacements)) => LocaleStatus::WouldFix { replacements },
        Ok(FileChange::Untouched) => LocaleStatus::Unchanged,
        Ok(FileChange::Missing) => LocaleStatus::Skipped,
        Err(e) => LocaleStatus::Failed {
            error: format!("{:#}", e),
        },
    };

    LocaleOutcome {
        locale: entry.locale.clone(),
        language_code: entry.language_code.clone(),
        path,
        status,
    }
}

/// Run the fixer over the whole locale table, in table order.
pub fn run(config: &FixerConfig) -> FixReport {
    let mut outcomes = Vec::with_capacity(config.mapping.len());

    for entry in config.mapping.entries() {
        let outcome = fix_locale(config, entry);
        let failed = outcome.is_failure();
        outcomes.push(outcome);
        if failed && config.fail_fast {
            break;
        }
    }

    FixReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        base_dir: config.base_dir.clone(),
        encoding: config.encoding.name().to_string(),
        dry_run: config.dry_run,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_uses_locale_only() {
        let path = target_path(Path::new("docs/terms"), "en");
        assert_eq!(path, PathBuf::from("docs/terms/terms-en.html"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let (out, n) = replace_placeholder(r#"<html lang="ro"><p lang="ro">x</p></html>"#, "es");
        assert_eq!(out, r#"<html lang="es"><p lang="es">x</p></html>"#);
        assert_eq!(n, 2);
    }

    #[test]
    fn leaves_other_attributes_alone() {
        let input = r#"<html lang="ro" hreflang="ro-MD" data-lang='ro'>lang=ro</html>"#;
        let (out, n) = replace_placeholder(input, "fr");
        assert_eq!(n, 1);
        assert_eq!(out, r#"<html lang="fr" hreflang="ro-MD" data-lang='ro'>lang=ro</html>"#);
    }

    #[test]
    fn no_placeholder_is_noop() {
        let (out, n) = replace_placeholder(r#"<html lang="de">"#, "de");
        assert_eq!(n, 0);
        assert_eq!(out, r#"<html lang="de">"#);
    }

    #[test]
    fn temp_file_is_a_hidden_sibling() {
        let tmp = tmp_path(Path::new("docs/terms/terms-fr.html"));
        assert_eq!(tmp, PathBuf::from("docs/terms/.terms-fr.html.tmp"));
    }

    #[test]
    fn region_code_substituted_verbatim() {
        let (out, _) = replace_placeholder(r#"<html lang="ro">"#, "en-US");
        assert_eq!(out, r#"<html lang="en-US">"#);
    }
}
