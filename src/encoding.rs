// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text encoding used for both reading and writing terms files
//!
//! Decoding is strict: no BOM sniffing and no replacement characters, so
//! whatever bytes are not part of a substitution come back out unchanged.

use anyhow::{anyhow, bail, Result};
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    inner: &'static Encoding,
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self { inner: UTF_8 }
    }
}

impl TextEncoding {
    /// Resolve a WHATWG encoding label such as `utf-8` or `latin1`.
    ///
    /// Only UTF-8 and single-byte encodings are accepted: their strict
    /// decode followed by encode gives back the original bytes. Multi-byte
    /// legacy encodings (Shift_JIS, Big5, EUC-KR, ...) normalise some byte
    /// sequences on the way back out, and UTF-16 cannot be written at all.
    pub fn for_label(label: &str) -> Result<Self> {
        let inner = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| anyhow!("unknown text encoding '{}'", label))?;
        if inner != UTF_8 && !inner.is_single_byte() {
            bail!(
                "text encoding '{}' cannot be used to rewrite files in place",
                inner.name()
            );
        }
        Ok(Self { inner })
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        self.inner
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| anyhow!("content is not valid {}", self.name()))
    }

    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        let (bytes, _, had_unmappable) = self.inner.encode(text);
        if had_unmappable {
            bail!("content contains characters not representable in {}", self.name());
        }
        Ok(bytes)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
