// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language code validation for the locale table.
//!
//! Codes given on the command line end up verbatim inside a `lang="..."`
//! attribute, so they are checked against ISO 639-1 before any file is
//! touched.

mod iso639;

pub use iso639::{is_valid_iso639_1, is_valid_language_tag, language_name};
