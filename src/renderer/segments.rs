//! Style inheritance - flatten a text line into uniformly styled runs.
//!
//! Attributes accumulate down the span tree (`<i><strong>` is bold italic).
//! Tone comes from the line and is overridden by a critical span for its
//! whole subtree.

use crate::composer::TextLine;
use crate::markup::StyledNode;
use crate::types::{Attr, Tone};

/// Run of text with fully resolved styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub attrs: Attr,
    pub tone: Tone,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attrs: Attr::NONE,
            tone: Tone::Base,
        }
    }

    /// True when the run needs no escape sequences.
    pub fn is_unstyled(&self) -> bool {
        self.attrs.is_empty() && self.tone.is_base()
    }
}

/// Flatten a line into segments, merging neighbours with equal styling.
pub fn segments(line: &TextLine) -> Vec<Segment> {
    let mut out = Vec::new();
    let tone = line.tone.unwrap_or_default();
    for node in &line.content {
        collect(node, Attr::NONE, tone, &mut out);
    }
    out
}

fn collect(node: &StyledNode, attrs: Attr, tone: Tone, out: &mut Vec<Segment>) {
    match node {
        StyledNode::PlainText(text) => push(out, text, attrs, tone),
        StyledNode::StyledSpan { style, children } => {
            let attrs = attrs | style.attrs();
            let tone = style.tone().unwrap_or(tone);
            for child in children {
                collect(child, attrs, tone, out);
            }
        }
    }
}

fn push(out: &mut Vec<Segment>, text: &str, attrs: Attr, tone: Tone) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = out.last_mut() {
        if last.attrs == attrs && last.tone == tone {
            last.text.push_str(text);
            return;
        }
    }
    out.push(Segment {
        text: text.to_string(),
        attrs,
        tone,
    });
}

// =============================================================================
// Tests
// =============================================================================
