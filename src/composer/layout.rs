//! Layout tree handed to the renderer.

use crate::markup::{SpanStyle, StyledNode};
use crate::settings::FrameStyle;
use crate::types::{Align, CornerRadius, Spacing, Tone};

/// One line of text: styled runs plus an optional tone for the whole line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLine {
    /// `None` leaves the surface's default color.
    pub tone: Option<Tone>,
    pub content: Vec<StyledNode>,
}

impl TextLine {
    pub fn new(tone: Option<Tone>) -> Self {
        Self {
            tone,
            content: Vec::new(),
        }
    }

    /// Append the formatted clock, separated by a space and set in strong.
    pub fn push_clock(&mut self, clock: &str) {
        self.content.push(StyledNode::text(" "));
        self.content
            .push(StyledNode::span(SpanStyle::Strong, vec![StyledNode::text(clock)]));
    }
}

/// Grid column template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumns {
    /// Fixed-width first column in pixels, auto second column.
    FixedThenAuto(u32),
}

/// Node of the banner layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    /// Vertical stack.
    Stack {
        frame: Option<FrameStyle>,
        gap: Spacing,
        children: Vec<LayoutNode>,
    },
    /// Two-dimensional grid.
    Grid {
        columns: GridColumns,
        justify_items: Align,
        align_items: Align,
        gap: Spacing,
        children: Vec<LayoutNode>,
    },
    /// Fixed-width box.
    Frame {
        inline_size: u32,
        child: Box<LayoutNode>,
    },
    /// Image that fills its container.
    Image {
        source: String,
        aspect_ratio: u32,
        radius: CornerRadius,
    },
    Text(TextLine),
}

impl LayoutNode {
    /// Every text line in document order.
    pub fn text_lines(&self) -> Vec<&TextLine> {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines
    }

    fn collect_lines<'a>(&'a self, lines: &mut Vec<&'a TextLine>) {
        match self {
            Self::Stack { children, .. } | Self::Grid { children, .. } => {
                for child in children {
                    child.collect_lines(lines);
                }
            }
            Self::Frame { child, .. } => child.collect_lines(lines),
            Self::Image { .. } => {}
            Self::Text(line) => lines.push(line),
        }
    }
}
