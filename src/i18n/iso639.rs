// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language codes and the `lang` attribute values built on them.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// All ISO 639-1 two-letter codes, sorted for binary search.
const ISO639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is a known lowercase ISO 639-1 two-letter code.
///
/// # Examples
/// ```
/// assert!(terms_lang_fix::i18n::is_valid_iso639_1("fr"));
/// assert!(!terms_lang_fix::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO639_1.binary_search(&code).is_ok()
}

/// Whether `tag` is usable as a `lang` attribute value: an ISO 639-1 primary
/// subtag optionally followed by `-`-separated alphanumeric subtags of 1 to 8
/// characters (`en`, `en-US`, `zh-Hant-TW`).
pub fn is_valid_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary = subtags.next().unwrap_or_default();
    is_valid_iso639_1(primary)
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// English name for the primary subtag of a language tag.
///
/// Only covers the languages terms pages are commonly published in.
pub fn language_name(tag: &str) -> Option<&'static str> {
    let primary = tag.split('-').next().unwrap_or_default();
    match primary {
        "en" => Some("English"),
        "fr" => Some("French"),
        "es" => Some("Spanish"),
        "it" => Some("Italian"),
        "de" => Some("German"),
        "ro" => Some("Romanian"),
        "pt" => Some("Portuguese"),
        "nl" => Some("Dutch"),
        "pl" => Some("Polish"),
        "hu" => Some("Hungarian"),
        "bg" => Some("Bulgarian"),
        "ru" => Some("Russian"),
        "uk" => Some("Ukrainian"),
        _ => None,
    }
}
