#![forbid(unsafe_code)]

//! Default paragraph tokenizer.

/// Split a paragraph into the chunks the packer consumes.
///
/// Chunks alternate between words and whitespace runs; no chunk mixes
/// the two, and concatenating them reproduces the input. Any tokenizer
/// upholding those invariants can feed
/// [`wrap_chunks`](crate::wrap_chunks) instead of this one.
#[must_use]
pub fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut in_whitespace = false;

    for ch in text.chars() {
        let is_ws = ch.is_whitespace();
        if is_ws != in_whitespace && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(ch);
        in_whitespace = is_ws;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
