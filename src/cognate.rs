//! Kannada and Telugu share block layout, so a fixed offset maps one onto the other.

use serde::Serialize;

use crate::utils::is_kannada_char;

/// Distance between the Kannada block (U+0C80) and the Telugu block (U+0C00).
pub const BLOCK_OFFSET: u32 = 0x80;

fn is_telugu_char(c: char) -> bool {
    c >= '\u{0C00}' && c <= '\u{0C7F}'
}

fn shift(c: char, forward: bool) -> char {
    let cp = c as u32;
    let target = if forward { cp - BLOCK_OFFSET } else { cp + BLOCK_OFFSET };
    char::from_u32(target).unwrap_or(c)
}

/// Moves every Kannada-block scalar into the Telugu block; anything else is untouched.
pub fn to_telugu(text: &str) -> String {
    text.chars()
        .map(|c| if is_kannada_char(c) { shift(c, true) } else { c })
        .collect()
}

/// Inverse of [`to_telugu`].
pub fn to_kannada(text: &str) -> String {
    text.chars()
        .map(|c| if is_telugu_char(c) { shift(c, false) } else { c })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CognateReport {
    pub converted: String,
    /// Share of non-whitespace scalars that lie in the Kannada block.
    pub score: f64,
}

pub fn script_similarity(text: &str) -> CognateReport {
    let mut total = 0usize;
    let mut in_block = 0usize;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if is_kannada_char(c) {
            in_block += 1;
        }
    }

    let score = if total == 0 { 0.0 } else { in_block as f64 / total as f64 };
    CognateReport { converted: to_telugu(text), score }
}
