#![forbid(unsafe_code)]

//! Wrap configuration and fail-fast validation.
//!
//! [`WrapOptions`] carries everything the packer needs: the target width
//! in cells, per-line indents, the truncation placeholder, and the
//! breaking flags. Invalid configurations are rejected up front, before
//! any chunk is consumed.
//!
//! # Example
//! ```
//! use zenwrap::WrapOptions;
//!
//! let opts = WrapOptions::new(40)
//!     .initial_indent("* ")
//!     .subsequent_indent("  ")
//!     .max_lines(3);
//!
//! assert!(opts.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use zenwrap_width::display_width;

/// Errors from wrap configuration, raised before any packing begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapError {
    /// The configured width was not positive.
    InvalidWidth(usize),
    /// Indent plus the stripped placeholder cannot fit on any line while
    /// a line limit is in force.
    PlaceholderTooWide {
        /// Cells needed for indent plus stripped placeholder.
        needed: usize,
        /// The configured width.
        width: usize,
    },
}

impl std::fmt::Display for WrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWidth(w) => write!(f, "invalid width {w} (must be > 0)"),
            Self::PlaceholderTooWide { needed, width } => {
                write!(f, "placeholder too large for max width ({needed} > {width} cells)")
            }
        }
    }
}

impl std::error::Error for WrapError {}

/// Options for cell-aware line wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapOptions {
    /// Maximum line width in cells, indent included.
    pub width: usize,
    /// Prefix for the first output line.
    pub initial_indent: String,
    /// Prefix for every output line after the first.
    pub subsequent_indent: String,
    /// Marker appended when output is truncated by [`max_lines`](Self::max_lines).
    pub placeholder: String,
    /// Split chunks wider than a whole line.
    pub break_long_words: bool,
    /// Prefer splitting a long chunk just after a hyphen.
    pub break_on_hyphens: bool,
    /// Suppress whitespace chunks at line boundaries.
    pub drop_whitespace: bool,
    /// Upper bound on the number of output lines.
    pub max_lines: Option<NonZeroUsize>,
}

impl WrapOptions {
    /// Create options with the given width and default behavior.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            initial_indent: String::new(),
            subsequent_indent: String::new(),
            placeholder: String::from(" [...]"),
            break_long_words: true,
            break_on_hyphens: true,
            drop_whitespace: true,
            max_lines: None,
        }
    }

    /// Set the first-line indent.
    #[must_use]
    pub fn initial_indent(mut self, indent: impl Into<String>) -> Self {
        self.initial_indent = indent.into();
        self
    }

    /// Set the continuation-line indent.
    #[must_use]
    pub fn subsequent_indent(mut self, indent: impl Into<String>) -> Self {
        self.subsequent_indent = indent.into();
        self
    }

    /// Set the truncation placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set whether chunks wider than a whole line are split.
    #[must_use]
    pub fn break_long_words(mut self, split: bool) -> Self {
        self.break_long_words = split;
        self
    }

    /// Set whether long-chunk splits prefer hyphen boundaries.
    #[must_use]
    pub fn break_on_hyphens(mut self, hyphens: bool) -> Self {
        self.break_on_hyphens = hyphens;
        self
    }

    /// Set whether whitespace chunks at line boundaries are suppressed.
    #[must_use]
    pub fn drop_whitespace(mut self, drop: bool) -> Self {
        self.drop_whitespace = drop;
        self
    }

    /// Limit the number of output lines. Zero disables the limit.
    #[must_use]
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = NonZeroUsize::new(max_lines);
        self
    }

    /// Check the configuration before packing.
    ///
    /// # Errors
    /// [`WrapError::InvalidWidth`] when the width is zero, and
    /// [`WrapError::PlaceholderTooWide`] when a line limit is set but the
    /// wider indent plus the leading-stripped placeholder exceeds the
    /// width — no line could ever hold the truncation marker.
    pub fn validate(&self) -> Result<(), WrapError> {
        if self.width == 0 {
            return Err(WrapError::InvalidWidth(self.width));
        }
        if self.max_lines.is_some() {
            let indent = display_width(&self.initial_indent)
                .max(display_width(&self.subsequent_indent));
            let needed = indent + display_width(self.placeholder.trim_start());
            if needed > self.width {
                return Err(WrapError::PlaceholderTooWide {
                    needed,
                    width: self.width,
                });
            }
        }
        Ok(())
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = WrapOptions::default();
        assert_eq!(opts.width, 70);
        assert_eq!(opts.placeholder, " [...]");
        assert!(opts.break_long_words);
        assert!(opts.break_on_hyphens);
        assert!(opts.drop_whitespace);
        assert!(opts.max_lines.is_none());
        assert!(opts.initial_indent.is_empty());
        assert!(opts.subsequent_indent.is_empty());
    }

    #[test]
    fn builder_chains() {
        let opts = WrapOptions::new(24)
            .initial_indent("> ")
            .subsequent_indent(">> ")
            .placeholder("…")
            .break_long_words(false)
            .break_on_hyphens(false)
            .drop_whitespace(false)
            .max_lines(2);

        assert_eq!(opts.width, 24);
        assert_eq!(opts.initial_indent, "> ");
        assert_eq!(opts.subsequent_indent, ">> ");
        assert_eq!(opts.placeholder, "…");
        assert!(!opts.break_long_words);
        assert!(!opts.break_on_hyphens);
        assert!(!opts.drop_whitespace);
        assert_eq!(opts.max_lines.map(NonZeroUsize::get), Some(2));
    }

    #[test]
    fn zero_max_lines_means_unlimited() {
        let opts = WrapOptions::new(10).max_lines(0);
        assert!(opts.max_lines.is_none());
    }

    #[test]
    fn zero_width_is_invalid() {
        assert_eq!(
            WrapOptions::new(0).validate(),
            Err(WrapError::InvalidWidth(0))
        );
    }

    #[test]
    fn placeholder_must_fit_when_line_limited() {
        // Stripped placeholder "[...]" is 5 cells; width 4 cannot hold it.
        let opts = WrapOptions::new(4).max_lines(1);
        assert_eq!(
            opts.validate(),
            Err(WrapError::PlaceholderTooWide { needed: 5, width: 4 })
        );
    }

    #[test]
    fn oversize_placeholder_allowed_without_line_limit() {
        let opts = WrapOptions::new(4);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn validation_measures_indent_in_cells() {
        // Ideographic space indent is 2 cells, placeholder "…" is 2.
        let ok = WrapOptions::new(4)
            .subsequent_indent("\u{3000}")
            .placeholder("…")
            .max_lines(2);
        assert!(ok.validate().is_ok());

        let too_narrow = WrapOptions::new(3)
            .subsequent_indent("\u{3000}")
            .placeholder("…")
            .max_lines(2);
        assert_eq!(
            too_narrow.validate(),
            Err(WrapError::PlaceholderTooWide { needed: 4, width: 3 })
        );
    }

    #[test]
    fn validation_uses_wider_indent() {
        let opts = WrapOptions::new(6)
            .initial_indent("xxxx")
            .placeholder("[.]")
            .max_lines(1);
        assert_eq!(
            opts.validate(),
            Err(WrapError::PlaceholderTooWide { needed: 7, width: 6 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WrapError::InvalidWidth(0).to_string(),
            "invalid width 0 (must be > 0)"
        );
        assert_eq!(
            WrapError::PlaceholderTooWide { needed: 5, width: 4 }.to_string(),
            "placeholder too large for max width (5 > 4 cells)"
        );
    }

    #[test]
    fn serde_round_trip() {
        let opts = WrapOptions::new(32).subsequent_indent("  ").max_lines(4);
        let json = serde_json::to_string(&opts).expect("serialize");
        let back: WrapOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, opts);
    }
}
