//! Styled node tree produced by the markup parser.

use crate::types::{Attr, Tone};

// =============================================================================
// Span Style
// =============================================================================

/// The three inline styles the markup recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    /// `<i>…</i>`
    Emphasis,
    /// `<strong>…</strong>`
    Strong,
    /// `<span>…</span>`. Always critical tone, whatever the content asks for.
    CriticalTone,
}

impl SpanStyle {
    /// Marker name between the angle brackets.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Emphasis => "i",
            Self::Strong => "strong",
            Self::CriticalTone => "span",
        }
    }

    /// Attributes this style adds on top of its parent's.
    pub const fn attrs(self) -> Attr {
        match self {
            Self::Emphasis => Attr::ITALIC,
            Self::Strong => Attr::BOLD,
            Self::CriticalTone => Attr::NONE,
        }
    }

    /// Tone this style forces, if any.
    pub const fn tone(self) -> Option<Tone> {
        match self {
            Self::CriticalTone => Some(Tone::Critical),
            Self::Emphasis | Self::Strong => None,
        }
    }
}

// =============================================================================
// Styled Node
// =============================================================================

/// One unit of renderable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyledNode {
    /// Literal text, never empty when produced by the parser.
    PlainText(String),
    /// Styled wrapper; children are in document order.
    StyledSpan {
        style: SpanStyle,
        children: Vec<StyledNode>,
    },
}

impl StyledNode {
    /// Create a plain text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::PlainText(value.into())
    }

    /// Create a styled span around `children`.
    pub fn span(style: SpanStyle, children: Vec<StyledNode>) -> Self {
        Self::StyledSpan { style, children }
    }

    /// Concatenated literal text with every marker removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match self {
            Self::PlainText(value) => out.push_str(value),
            Self::StyledSpan { children, .. } => {
                for child in children {
                    child.write_plain(out);
                }
            }
        }
    }
}

// =============================================================================
// Parse Result
// =============================================================================

/// Result of parsing one text block.
///
/// A block with a single top-level node degrades to [`Parsed::Node`]; mixed
/// content stays a sequence. Consumers that don't care use [`Parsed::nodes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Node(StyledNode),
    Nodes(Vec<StyledNode>),
}

impl Parsed {
    /// View either shape as a slice of top-level nodes.
    pub fn nodes(&self) -> &[StyledNode] {
        match self {
            Self::Node(node) => std::slice::from_ref(node),
            Self::Nodes(nodes) => nodes,
        }
    }

    /// Take the top-level nodes.
    pub fn into_nodes(self) -> Vec<StyledNode> {
        match self {
            Self::Node(node) => vec![node],
            Self::Nodes(nodes) => nodes,
        }
    }

    /// True when nothing renderable was produced.
    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Concatenated literal text of every top-level node.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in self.nodes() {
            node.write_plain(&mut out);
        }
        out
    }
}

impl From<StyledNode> for Parsed {
    fn from(node: StyledNode) -> Self {
        Self::Node(node)
    }
}

// =============================================================================
// Tests
// =============================================================================
