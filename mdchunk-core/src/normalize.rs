//! Size normalizer
//!
//! Two passes over the segments produced by the heading splitter:
//!
//! 1. [`split_oversized`] re-splits sections longer than `max_chars` on
//!    blank-line paragraph boundaries, slicing single paragraphs that are
//!    still too long into fixed-size pieces.
//! 2. [`merge_undersized`] folds chunks shorter than `min_chars` into a
//!    neighbour in one left-to-right pass.
//!
//! All lengths are measured in characters.

use crate::config::ChunkerConfig;
use crate::types::{with_heading, Chunk, Segment, PARAGRAPH_SEPARATOR};
use regex::Regex;
use std::sync::LazyLock;

/// A newline, optional whitespace (including further newlines), a newline
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid"));

/// Run both normalization passes according to `config`
pub fn normalize(segments: Vec<Segment>, config: &ChunkerConfig) -> Vec<Chunk> {
    let chunks = split_oversized(segments, config.max_chars, config.split_large);
    log::debug!("{} chunks after oversize pass", chunks.len());

    if !config.merges_small_chunks() {
        return chunks;
    }

    let merged = merge_undersized(chunks, config.min_chars);
    log::debug!("{} chunks after undersize merge", merged.len());
    merged
}

/// Turn each segment into one or more chunks of at most `max_chars`.
///
/// A segment is kept whole when splitting is disabled, when its full text
/// already fits, or when its body is empty (a lone heading is never split).
pub fn split_oversized(segments: Vec<Segment>, max_chars: usize, split_large: bool) -> Vec<Chunk> {
    segments
        .into_iter()
        .flat_map(|segment| split_segment(segment, max_chars, split_large))
        .collect()
}

fn split_segment(segment: Segment, max_chars: usize, split_large: bool) -> Vec<Chunk> {
    let full = segment.full_text();
    if !split_large || char_len(&full) <= max_chars || segment.body.is_empty() {
        return vec![Chunk::new(segment.heading, full)];
    }

    let pieces = split_paragraphs(&segment.body, max_chars);
    log::trace!(
        "split section {:?} into {} pieces",
        segment.heading,
        pieces.len()
    );

    // Fixed-size slicing can produce whitespace-only pieces. They are dropped
    // rather than emitted as a lone heading line.
    pieces
        .into_iter()
        .filter(|piece| !piece.trim().is_empty())
        .map(|piece| Chunk::new(segment.heading.clone(), with_heading(&segment.heading, &piece)))
        .collect()
}

/// Split `text` into pieces of at most `max_chars` on paragraph boundaries.
///
/// Paragraphs are packed greedily, each counting its length plus two for the
/// joining blank line. A paragraph that cannot fit on its own is cut into
/// slices of exactly `max_chars` characters. A `max_chars` of zero leaves
/// the text whole.
pub fn split_paragraphs(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 || char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut pieces = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut buffered = 0;

    let paragraphs = PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty());

    for paragraph in paragraphs {
        let cost = char_len(paragraph) + PARAGRAPH_SEPARATOR.len();
        if buffered + cost <= max_chars {
            buffer.push(paragraph);
            buffered += cost;
            continue;
        }

        if !buffer.is_empty() {
            pieces.push(buffer.join(PARAGRAPH_SEPARATOR));
            buffer.clear();
        }

        if cost > max_chars {
            pieces.extend(slice_chars(paragraph, max_chars));
            buffered = 0;
        } else {
            buffer.push(paragraph);
            buffered = cost;
        }
    }

    if !buffer.is_empty() {
        pieces.push(buffer.join(PARAGRAPH_SEPARATOR));
    }

    pieces
}

/// Cut `text` into consecutive slices of `size` characters, the last one shorter
fn slice_chars(text: &str, size: usize) -> Vec<String> {
    let mut slices = Vec::with_capacity(char_len(text) / size + 1);
    let mut start = 0;
    let mut count = 0;

    for (offset, _) in text.char_indices() {
        if count == size {
            slices.push(text[start..offset].to_string());
            start = offset;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        slices.push(text[start..].to_string());
    }

    slices
}

/// Fold chunks shorter than `min_chars` into a neighbour.
///
/// A short chunk is appended to the last accepted chunk. With nothing
/// accepted yet it is carried forward and prepended to the next chunk, which
/// keeps its own heading and is then judged with the prefix included. A short
/// final chunk with nothing before it is kept. Merged chunks are never
/// re-checked.
pub fn merge_undersized(chunks: Vec<Chunk>, min_chars: usize) -> Vec<Chunk> {
    let total = chunks.len();

    let (merged, carried) = chunks.into_iter().enumerate().fold(
        (Vec::with_capacity(total), None::<String>),
        |(mut merged, carried), (idx, chunk)| {
            let chunk = match carried {
                Some(prefix) => chunk.prepend(&prefix),
                None => chunk,
            };

            if chunk.char_count() >= min_chars {
                merged.push(chunk);
                return (merged, None);
            }

            match merged.pop() {
                Some(previous) => {
                    merged.push(previous.absorb(&chunk));
                    (merged, None)
                }
                None if idx + 1 < total => (merged, Some(chunk.text)),
                None => {
                    merged.push(chunk);
                    (merged, None)
                }
            }
        },
    );
    debug_assert!(carried.is_none());

    merged
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
