#![forbid(unsafe_code)]

//! Greedy chunk packing with cell-accurate budgets.
//!
//! The packer consumes an ordered sequence of chunks (words and
//! whitespace runs, never mixed) and produces wrapped lines. Every
//! decision — indent budgets, greedy fitting, whitespace dropping,
//! placeholder truncation, long-chunk splitting — is accounted in
//! display cells, so CJK and fullwidth text wraps where it actually
//! lands on screen.
//!
//! # Example
//! ```
//! use zenwrap::{wrap, WrapOptions};
//!
//! let lines = wrap("Hello world foo bar", &WrapOptions::new(10))?;
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//!
//! // Kana are two cells each: six cells hold three of them.
//! let lines = wrap("こんにちは 世界", &WrapOptions::new(6))?;
//! assert_eq!(lines, vec!["こんに", "ちは", "世界"]);
//! # Ok::<(), zenwrap::WrapError>(())
//! ```

use crate::chunk::split_chunks;
use crate::options::{WrapError, WrapOptions};
use smallvec::SmallVec;
use std::collections::VecDeque;
use zenwrap_width::{display_width, fit_prefix};

/// Chunks assembling the line under construction.
type LineBuf = SmallVec<[String; 8]>;

/// Wrap a single paragraph of text.
///
/// Tokenizes with [`split_chunks`] and packs with [`wrap_chunks`].
/// Embedded newlines count as ordinary whitespace; split paragraphs
/// beforehand if they must stay separate.
///
/// # Errors
/// See [`WrapOptions::validate`].
pub fn wrap(text: &str, options: &WrapOptions) -> Result<Vec<String>, WrapError> {
    wrap_chunks(split_chunks(text), options)
}

/// Wrap a single paragraph into one newline-joined string.
///
/// # Errors
/// See [`WrapOptions::validate`].
///
/// # Example
/// ```
/// use zenwrap::{fill, WrapOptions};
///
/// assert_eq!(fill("AA ああ", &WrapOptions::new(4))?, "AA\nああ");
/// # Ok::<(), zenwrap::WrapError>(())
/// ```
pub fn fill(text: &str, options: &WrapOptions) -> Result<String, WrapError> {
    Ok(wrap(text, options)?.join("\n"))
}

/// Pack pre-split chunks into lines of at most `options.width` cells.
///
/// Each chunk must be entirely whitespace or entirely non-whitespace.
/// Chunks are consumed in order; a line break can fall between any two
/// chunks, and chunks wider than a whole line are handed to the
/// long-chunk splitter. Returned lines carry their indent prefix and no
/// trailing newline.
///
/// Every produced line fits the width except a chunk placed alone when
/// [`break_long_words`](WrapOptions::break_long_words) is off, or a
/// single wide scalar that cannot fit the width at all.
///
/// # Errors
/// See [`WrapOptions::validate`].
///
/// # Example
/// ```
/// use zenwrap::{wrap_chunks, WrapOptions};
///
/// let lines = wrap_chunks(["AA", " ", "あ", "い", "う"], &WrapOptions::new(5))?;
/// assert_eq!(lines, vec!["AA あ", "いう"]);
/// # Ok::<(), zenwrap::WrapError>(())
/// ```
pub fn wrap_chunks<I, S>(chunks: I, options: &WrapOptions) -> Result<Vec<String>, WrapError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    options.validate()?;

    let mut pending: VecDeque<String> = chunks.into_iter().map(Into::into).collect();
    let mut lines: Vec<String> = Vec::new();

    while !pending.is_empty() {
        let indent = if lines.is_empty() {
            options.initial_indent.as_str()
        } else {
            options.subsequent_indent.as_str()
        };
        let budget = options.width.saturating_sub(display_width(indent));

        // Continuation lines never start with whitespace; the very first
        // line keeps whatever leads the input.
        if options.drop_whitespace
            && !lines.is_empty()
            && pending.front().is_some_and(|c| is_blank(c))
        {
            pending.pop_front();
        }

        let mut line = LineBuf::new();
        let mut line_width = 0;

        while let Some(chunk) = pending.pop_front() {
            let chunk_width = display_width(&chunk);
            if line_width + chunk_width > budget {
                pending.push_front(chunk);
                break;
            }
            line_width += chunk_width;
            line.push(chunk);
        }

        // The line is full and the next chunk would not fit on any line.
        if pending.front().is_some_and(|c| display_width(c) > budget) {
            split_long_chunk(&mut pending, &mut line, line_width, budget, options);
            line_width = line.iter().map(|c| display_width(c)).sum();
        }

        if options.drop_whitespace && line.last().is_some_and(|c| is_blank(c)) {
            if let Some(ws) = line.pop() {
                line_width -= display_width(&ws);
            }
        }

        if line.is_empty() {
            continue;
        }

        let keep_packing = match options.max_lines {
            None => true,
            Some(max) => {
                // Room for another line, or this is the last of the data
                // and it fits.
                let last_data = pending.is_empty()
                    || (options.drop_whitespace
                        && pending.len() == 1
                        && pending.front().is_some_and(|c| is_blank(c)));
                lines.len() + 1 < max.get() || (last_data && line_width <= budget)
            }
        };

        if keep_packing {
            lines.push(compose_line(indent, &line));
            continue;
        }

        truncate_into(&mut lines, line, line_width, indent, budget, options);
        break;
    }

    Ok(lines)
}

/// Finalize output at the line limit.
///
/// Strips the buffer from the end until a non-whitespace chunk plus the
/// placeholder fits the budget; failing that, appends the placeholder to
/// the previous line when it fits the full width, else emits the
/// placeholder alone.
fn truncate_into(
    lines: &mut Vec<String>,
    mut line: LineBuf,
    mut line_width: usize,
    indent: &str,
    budget: usize,
    options: &WrapOptions,
) {
    tracing::debug!(produced = lines.len(), "line limit reached, truncating");
    let placeholder_width = display_width(&options.placeholder);

    while let Some(last) = line.last() {
        if !is_blank(last) && line_width + placeholder_width <= budget {
            let mut text = compose_line(indent, &line);
            text.push_str(&options.placeholder);
            lines.push(text);
            return;
        }
        line_width -= display_width(last);
        line.pop();
    }

    if let Some(prev) = lines.last_mut() {
        let trimmed = prev.trim_end();
        if display_width(trimmed) + placeholder_width <= options.width {
            let mut text = String::with_capacity(trimmed.len() + options.placeholder.len());
            text.push_str(trimmed);
            text.push_str(&options.placeholder);
            *prev = text;
            return;
        }
    }

    let mut text = String::from(indent);
    text.push_str(options.placeholder.trim_start());
    lines.push(text);
}

/// Place as much of an over-wide chunk as the current line allows.
///
/// With [`break_long_words`](WrapOptions::break_long_words) on, carves
/// the widest fitting prefix (preferring a hyphen boundary under
/// [`break_on_hyphens`](WrapOptions::break_on_hyphens)) and returns the
/// remainder to the pending queue. With it off, the whole chunk goes on
/// an empty line unsplit, or stays pending until the next line starts.
fn split_long_chunk(
    pending: &mut VecDeque<String>,
    line: &mut LineBuf,
    line_width: usize,
    budget: usize,
    options: &WrapOptions,
) {
    let Some(chunk) = pending.pop_front() else {
        return;
    };

    // The indent can consume the whole width; keep one cell so a pass
    // always makes progress. Otherwise the greedy loop left
    // line_width <= budget.
    let space_left = if budget == 0 {
        1
    } else {
        budget.saturating_sub(line_width)
    };

    if options.break_long_words {
        let mut end = fit_prefix(&chunk, space_left);

        if options.break_on_hyphens && display_width(&chunk) > space_left {
            // Break after the last hyphen within the first `space_left`
            // characters, if a non-hyphen precedes it.
            let window = char_boundary_at(&chunk, space_left);
            if let Some(pos) = chunk[..window].rfind('-') {
                if chunk[..pos].chars().any(|c| c != '-') {
                    end = pos + 1;
                }
            }
        }

        if end == 0 && line.is_empty() {
            // A wide scalar against a one-cell budget still has to make
            // progress; overflow by one cell instead of looping.
            end = chunk.chars().next().map_or(0, char::len_utf8);
        }

        let rest = chunk[end..].to_string();
        let mut piece = chunk;
        piece.truncate(end);
        line.push(piece);
        pending.push_front(rest);
    } else if line.is_empty() {
        // An unsplittable chunk alone on its line minimizes the overflow.
        line.push(chunk);
    } else {
        // Leave it pending; the next pass devotes a fresh line to it.
        pending.push_front(chunk);
    }
}

/// A chunk is blank when it has no non-whitespace scalar.
fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(char::is_whitespace)
}

/// Byte offset of the `n`th character of `s`, or its full length.
fn char_boundary_at(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx)
}

fn compose_line(indent: &str, line: &[String]) -> String {
    let mut text =
        String::with_capacity(indent.len() + line.iter().map(String::len).sum::<usize>());
    text.push_str(indent);
    for chunk in line {
        text.push_str(chunk);
    }
    text
}
