// SPDX-License-Identifier: PMPL-1.0-or-later

//! terms-lang-fix: correct the `lang` attribute of per-locale terms pages.
//!
//! Each locale's `terms-<locale>.html` is generated from a Romanian template
//! and still carries `lang="ro"`. The fixer walks the locale table and puts
//! the right language code in place, leaving every other byte alone.

pub mod encoding;
pub mod fixer;
pub mod i18n;
pub mod report;
pub mod types;
