//! Inline markup parser.
//!
//! Recognizes exactly six literal markers, ASCII case-insensitive:
//! `<i>`, `<strong>`, `<span>` and their closers. Anything else that looks
//! like a tag is ordinary text.
//!
//! The scan is a single left-to-right pass with one recursive call per
//! nesting level. Each level returns the position just past the region it
//! consumed together with the nodes it built, so no cursor is shared between
//! levels.
//!
//! A level ends at the *next* closing marker, whatever kind it names:
//! `<i>a</strong>b` closes the emphasis span at `</strong>`. Unterminated
//! openers close at end of input. A stray closer at top level ends the parse.

use super::node::{Parsed, SpanStyle, StyledNode};

/// Deepest nesting honored. Openers past this depth are kept as literal
/// text so a hostile string cannot exhaust the stack.
pub const MAX_NESTING: usize = 64;

const STYLES: [SpanStyle; 3] = [SpanStyle::Emphasis, SpanStyle::Strong, SpanStyle::CriticalTone];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Open(SpanStyle),
    Close,
}

// =============================================================================
// Public API
// =============================================================================

/// Parse a text block into styled nodes.
///
/// Returns `None` for empty input. Otherwise a single top-level node is
/// returned as [`Parsed::Node`] and anything else as [`Parsed::Nodes`].
/// Never fails: malformed markup renders best-effort.
pub fn parse(text: &str) -> Option<Parsed> {
    if text.is_empty() {
        return None;
    }

    let (_, mut nodes) = parse_level(text, 0, 0);
    if nodes.len() == 1 {
        nodes.pop().map(Parsed::Node)
    } else {
        Some(Parsed::Nodes(nodes))
    }
}

// =============================================================================
// Scanner
// =============================================================================

/// Parse one nesting level starting at byte `start`.
///
/// Returns the position just past the consumed region (after the closing
/// marker, or `text.len()`) and the sibling nodes of this level.
fn parse_level(text: &str, start: usize, depth: usize) -> (usize, Vec<StyledNode>) {
    let mut nodes = Vec::new();
    let mut pos = start;

    while pos < text.len() {
        match marker_at(&text[pos..]) {
            Some((Marker::Close, len)) => return (pos + len, nodes),
            Some((Marker::Open(style), len)) if depth < MAX_NESTING => {
                let (next, children) = parse_level(text, pos + len, depth + 1);
                nodes.push(StyledNode::span(style, children));
                pos = next;
            }
            Some((Marker::Open(_), len)) => {
                push_text(&mut nodes, &text[pos..pos + len]);
                pos += len;
            }
            None => {
                let end = next_marker(text, pos).unwrap_or(text.len());
                push_text(&mut nodes, &text[pos..end]);
                pos = end;
            }
        }
    }

    (pos, nodes)
}

/// Match a marker at the very start of `rest`.
///
/// Returns the marker and its byte length.
fn marker_at(rest: &str) -> Option<(Marker, usize)> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }

    let closing = bytes.get(1) == Some(&b'/');
    let name_start = if closing { 2 } else { 1 };

    STYLES.iter().find_map(|&style| {
        let name = style.tag().as_bytes();
        let end = name_start + name.len();
        let matched = bytes.len() > end
            && bytes[name_start..end].eq_ignore_ascii_case(name)
            && bytes[end] == b'>';
        if !matched {
            return None;
        }
        let marker = if closing { Marker::Close } else { Marker::Open(style) };
        Some((marker, end + 1))
    })
}

/// Byte offset of the next marker at or after `from`.
fn next_marker(text: &str, from: usize) -> Option<usize> {
    text[from..]
        .match_indices('<')
        .map(|(offset, _)| from + offset)
        .find(|&at| marker_at(&text[at..]).is_some())
}

/// Append literal text, skipping empties and merging with a preceding run.
fn push_text(nodes: &mut Vec<StyledNode>, value: &str) {
    if value.is_empty() {
        return;
    }
    if let Some(StyledNode::PlainText(last)) = nodes.last_mut() {
        last.push_str(value);
        return;
    }
    nodes.push(StyledNode::text(value));
}

// =============================================================================
// Tests
// =============================================================================
