#![forbid(unsafe_code)]

//! Greedy line wrapping that measures text in display cells.
//!
//! ASCII-oriented wrappers assume one column per character; on a
//! terminal, CJK and fullwidth characters take two. This crate wraps to
//! a cell budget instead of a character count, with the usual word-wrap
//! controls: paragraph indents, whitespace dropping, hyphen-aware
//! splitting of over-long words, and line-count truncation with a
//! placeholder.
//!
//! - [`wrap`] / [`fill`] — wrap a paragraph of text
//! - [`wrap_chunks`] — pack pre-tokenized chunks (bring your own
//!   tokenizer)
//! - [`WrapOptions`] — configuration with fail-fast [`validation`]
//!
//! [`validation`]: WrapOptions::validate
//!
//! # Example
//! ```
//! use zenwrap::{fill, WrapOptions};
//!
//! // Three kana fill a six-cell line.
//! let filled = fill("こんにちは 世界", &WrapOptions::new(6))?;
//! assert_eq!(filled, "こんに\nちは\n世界");
//! # Ok::<(), zenwrap::WrapError>(())
//! ```
//!
//! Width measurement itself lives in [`zenwrap_width`] and is re-exported
//! here: Wide, Fullwidth, and Ambiguous scalars are two cells, everything
//! else is one.

pub mod chunk;
pub mod options;
pub mod wrap;

pub use chunk::split_chunks;
pub use options::{WrapError, WrapOptions};
pub use wrap::{fill, wrap, wrap_chunks};

pub use zenwrap_width::{char_width, display_width, fit_prefix};
