//! Inline renderer for normal terminal mode.
//!
//! Writes the banner into the normal terminal buffer and, on every new
//! frame, erases the previously drawn rows before writing again. Suitable
//! for a countdown that updates in place without taking over the screen.

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::text::{rows, write_rows};
use crate::composer::LayoutNode;

/// Inline renderer. Tracks how many rows the last frame used.
#[derive(Debug, Default)]
pub struct InlineRenderer {
    previous_height: u16,
}

impl InlineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the previous frame with `node`.
    pub fn render<W: Write>(&mut self, out: &mut W, node: &LayoutNode) -> io::Result<()> {
        self.erase(out)?;

        let rows = rows(node);
        write_rows(out, &rows)?;
        out.flush()?;

        self.previous_height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        Ok(())
    }

    /// Erase the last frame and forget it.
    pub fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.erase(out)?;
        out.flush()?;
        self.previous_height = 0;
        Ok(())
    }

    /// Rows drawn by the last frame.
    pub fn previous_height(&self) -> u16 {
        self.previous_height
    }

    /// Forget the last frame without touching the terminal.
    pub fn reset(&mut self) {
        self.previous_height = 0;
    }

    fn erase<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.previous_height == 0 {
            return Ok(());
        }
        // Cursor sits at the end of the last row; MoveUp(0) would still move.
        if self.previous_height > 1 {
            queue!(out, MoveUp(self.previous_height - 1))?;
        }
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::TextLine;
    use crate::markup::StyledNode;
    use crate::types::Spacing;

    fn two_rows() -> LayoutNode {
        LayoutNode::Stack {
            frame: None,
            gap: Spacing::None,
            children: vec![
                LayoutNode::Text(TextLine {
                    tone: None,
                    content: vec![StyledNode::text("one")],
                }),
                LayoutNode::Text(TextLine {
                    tone: None,
                    content: vec![StyledNode::text("two")],
                }),
            ],
        }
    }

    #[test]
    fn test_inline_renderer_creation() {
        let renderer = InlineRenderer::new();
        assert_eq!(renderer.previous_height(), 0);
    }

    #[test]
    fn test_first_frame_writes_rows_only() {
        let mut renderer = InlineRenderer::new();
        let mut out = Vec::new();
        renderer.render(&mut out, &two_rows()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo");
        assert_eq!(renderer.previous_height(), 2);
    }

    #[test]
    fn test_second_frame_erases_first() {
        let mut renderer = InlineRenderer::new();
        renderer.render(&mut Vec::new(), &two_rows()).unwrap();

        let mut out = Vec::new();
        renderer.render(&mut out, &two_rows()).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("\x1b["));
        assert!(out.ends_with("one\ntwo"));
    }

    #[test]
    fn test_clear_and_reset() {
        let mut renderer = InlineRenderer::new();
        renderer.render(&mut Vec::new(), &two_rows()).unwrap();

        let mut out = Vec::new();
        renderer.clear(&mut out).unwrap();
        assert!(!out.is_empty());
        assert_eq!(renderer.previous_height(), 0);

        renderer.render(&mut Vec::new(), &two_rows()).unwrap();
        renderer.reset();
        assert_eq!(renderer.previous_height(), 0);
    }
}
