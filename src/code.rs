//! Decimal and emoji renderings of SAS bytes.
//!
//! Both forms read the secret MSB-first, slicing fixed-width groups across
//! byte boundaries:
//!
//! ```text
//! decimal: 5 bytes -> 3 x 13 bits (+1000 each), low bit of B4 unused
//! emoji:   6 bytes -> 7 x 6 bits (table index), low 6 bits of B5 unused
//! ```
//!
//! Surplus input bytes are ignored. Short input is an error rather than
//! being padded.

use crate::config::DEFAULT_SEPARATOR;
use crate::emoji::{emoji_for_code, EmojiRepresentation};
use crate::error::{CodeForm, Result, SasError};
use serde::Serialize;

/// Bytes consumed by the decimal form
pub const DECIMAL_BYTES: usize = 5;
/// Bytes consumed by the emoji form
pub const EMOJI_BYTES: usize = 6;
/// Numbers in a decimal code
pub const DECIMAL_CODE_LENGTH: usize = 3;
/// Emoji in an emoji code
pub const EMOJI_CODE_LENGTH: usize = 7;

/// Added to each 13-bit field so every number has four digits
const DECIMAL_OFFSET: u16 = 1000;

fn prefix(bytes: &[u8], form: CodeForm, expected: usize) -> Result<&[u8]> {
    if bytes.len() < expected {
        tracing::debug!(%form, expected, actual = bytes.len(), "SAS input too short");
        return Err(SasError::InvalidInputLength {
            form,
            expected,
            actual: bytes.len(),
        });
    }
    tracing::trace!(%form, input_len = bytes.len(), "deriving SAS code");
    Ok(&bytes[..expected])
}

/// Split the first 39 bits into three 13-bit fields, each in 0..=8191
pub fn decimal_fields(bytes: &[u8]) -> Result<[u16; DECIMAL_CODE_LENGTH]> {
    let b = prefix(bytes, CodeForm::Decimal, DECIMAL_BYTES)?;
    let [b0, b1, b2, b3, b4] = [b[0], b[1], b[2], b[3], b[4]].map(u16::from);

    Ok([
        b0 << 5 | b1 >> 3,
        (b1 & 0x7) << 10 | b2 << 2 | b3 >> 6,
        (b3 & 0x3f) << 7 | b4 >> 1,
    ])
}

/// Split the first 42 bits into seven 6-bit table indices
pub fn emoji_indices(bytes: &[u8]) -> Result<[u8; EMOJI_CODE_LENGTH]> {
    let b = prefix(bytes, CodeForm::Emoji, EMOJI_BYTES)?;

    Ok([
        (b[0] & 0xfc) >> 2,
        (b[0] & 0x03) << 4 | (b[1] & 0xf0) >> 4,
        (b[1] & 0x0f) << 2 | (b[2] & 0xc0) >> 6,
        b[2] & 0x3f,
        (b[3] & 0xfc) >> 2,
        (b[3] & 0x03) << 4 | (b[4] & 0xf0) >> 4,
        (b[4] & 0x0f) << 2 | (b[5] & 0xc0) >> 6,
    ])
}

/// Three 4-digit numbers in 1000..=9191
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecimalCode {
    numbers: [u16; DECIMAL_CODE_LENGTH],
}

impl DecimalCode {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let numbers = decimal_fields(bytes)?.map(|field| field + DECIMAL_OFFSET);
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> [u16; DECIMAL_CODE_LENGTH] {
        self.numbers
    }

    /// Join the numbers with `separator`
    pub fn format(&self, separator: &str) -> String {
        self.numbers
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// One number per line
    pub fn lines(&self) -> String {
        self.format("\n")
    }
}

impl std::fmt::Display for DecimalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(DEFAULT_SEPARATOR))
    }
}

/// Seven emoji, compared position by position between peers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmojiCode {
    indices: [u8; EMOJI_CODE_LENGTH],
    entries: [EmojiRepresentation; EMOJI_CODE_LENGTH],
}

impl EmojiCode {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let indices = emoji_indices(bytes)?;
        let entries = indices.map(|i| *emoji_for_code(i64::from(i)));
        Ok(Self { indices, entries })
    }

    pub fn indices(&self) -> [u8; EMOJI_CODE_LENGTH] {
        self.indices
    }

    pub fn entries(&self) -> &[EmojiRepresentation; EMOJI_CODE_LENGTH] {
        &self.entries
    }

    pub fn glyphs(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.glyph()).collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.label()).collect()
    }
}

impl std::fmt::Display for EmojiCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.glyphs().join(" "))
    }
}

/// Render the first five bytes as three numbers joined by `separator`
pub fn to_decimal_code(bytes: &[u8], separator: &str) -> Result<String> {
    Ok(DecimalCode::from_bytes(bytes)?.format(separator))
}

/// Render the first six bytes as seven emoji, in group order
pub fn to_emoji_code(bytes: &[u8]) -> Result<[EmojiRepresentation; EMOJI_CODE_LENGTH]> {
    Ok(*EmojiCode::from_bytes(bytes)?.entries())
}
