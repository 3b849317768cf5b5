#![forbid(unsafe_code)]

//! East Asian Width cell measurement.
//!
//! Fixed-width display contexts (terminals, monospace rendering) give CJK
//! and fullwidth characters two column cells while Latin text gets one.
//! This crate measures strings in cells rather than characters, following
//! the CJK convention for the East Asian Width property: Wide, Fullwidth,
//! and Ambiguous scalars are two cells; Narrow, Halfwidth, and Neutral
//! scalars are one.
//!
//! Measurement is per Unicode scalar value. There is no grapheme cluster
//! merging: a combining mark counts on its own, and every scalar measures
//! at least one cell.
//!
//! # Example
//! ```
//! use zenwrap_width::{char_width, display_width, fit_prefix};
//!
//! assert_eq!(char_width('a'), 1);
//! assert_eq!(char_width('あ'), 2);
//!
//! assert_eq!(display_width("AAあ"), 4);
//!
//! // The widest prefix of "あい" within 3 cells is "あ" (3 bytes).
//! assert_eq!(fit_prefix("あい", 3), 3);
//! ```

use unicode_width::UnicodeWidthChar;

/// Display width of a single Unicode scalar, in cells: 1 or 2.
///
/// Wide and Fullwidth scalars occupy two cells, as do East Asian Ambiguous
/// scalars (box drawing, arrows, Greek letters) under the CJK convention.
/// Scalars that carry no width of their own (controls, combining marks)
/// fall into the Neutral column and occupy one cell.
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    ch.width_cjk().unwrap_or(1).clamp(1, 2)
}

/// Display width of a string in cells.
///
/// Zero for the empty string, and additive over concatenation.
///
/// # Performance
/// Pure-ASCII input takes an O(n) byte-length fast path; every ASCII
/// scalar is exactly one cell.
#[inline]
#[must_use]
pub fn display_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.len();
    }
    s.chars().map(char_width).sum()
}

/// Byte length of the longest prefix of `s` whose display width is at
/// most `budget`.
///
/// Returns 0 when the first scalar alone exceeds the budget, and
/// `s.len()` when the whole string fits. The returned offset is always a
/// character boundary, so `&s[..fit_prefix(s, budget)]` is valid.
#[must_use]
pub fn fit_prefix(s: &str, budget: usize) -> usize {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        used += char_width(ch);
        if used > budget {
            return idx;
        }
    }
    s.len()
}
