//! Text output - plain and ANSI-styled renderings of a layout tree.
//!
//! The layout is first laid out into rows of [`Segment`]s. Stacks put
//! children below each other; grids put them side by side, padding each
//! column to its widest row. Images become a placeholder glyph.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use super::segments::{segments, Segment};
use crate::composer::LayoutNode;
use crate::types::{Attr, Tone};

/// Stand-in for the icon image.
pub const ICON_GLYPH: &str = "◉";

/// One rendered terminal row.
pub type Row = Vec<Segment>;

// =============================================================================
// Layout to rows
// =============================================================================

/// Lay a node out into rows.
pub fn rows(node: &LayoutNode) -> Vec<Row> {
    match node {
        LayoutNode::Text(line) => vec![segments(line)],
        LayoutNode::Stack { children, .. } => children.iter().flat_map(rows).collect(),
        LayoutNode::Frame { child, .. } => rows(child),
        LayoutNode::Image { .. } => vec![vec![Segment::plain(ICON_GLYPH)]],
        LayoutNode::Grid { children, .. } => side_by_side(children.iter().map(rows).collect()),
    }
}

fn side_by_side(columns: Vec<Vec<Row>>) -> Vec<Row> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = columns
        .iter()
        .map(|column| column.iter().map(|row| row_width(row)).max().unwrap_or(0))
        .collect();

    (0..height)
        .map(|y| {
            let mut row = Row::new();
            for (x, column) in columns.iter().enumerate() {
                let cell = column.get(y).cloned().unwrap_or_default();
                let is_last = x + 1 == columns.len();
                let pad = if is_last { 0 } else { widths[x] - row_width(&cell) + 1 };
                row.extend(cell);
                if pad > 0 {
                    row.push(Segment::plain(" ".repeat(pad)));
                }
            }
            row
        })
        .collect()
}

fn row_width(row: &Row) -> usize {
    row.iter().map(|segment| segment.text.width()).sum()
}

// =============================================================================
// Plain
// =============================================================================

/// Render without escape sequences, one line per row.
pub fn render_plain(node: &LayoutNode) -> String {
    rows(node)
        .iter()
        .map(|row| row.iter().map(|segment| segment.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// ANSI
// =============================================================================

/// Terminal color for a tone; `None` keeps the terminal default.
pub fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Base | Tone::Decorative => None,
        Tone::Accent | Tone::Interactive => Some(Color::Blue),
        Tone::Subdued => Some(Color::DarkGrey),
        Tone::Info => Some(Color::Cyan),
        Tone::Success => Some(Color::Green),
        Tone::Warning => Some(Color::Yellow),
        Tone::Critical => Some(Color::Red),
    }
}

/// Write rows with crossterm style commands. Every styled run is reset
/// afterwards, so rows never leak attributes into each other.
pub fn write_rows<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    for (y, row) in rows.iter().enumerate() {
        if y > 0 {
            queue!(out, Print("\n"))?;
        }
        for segment in row {
            write_segment(out, segment)?;
        }
    }
    Ok(())
}

fn write_segment<W: Write>(out: &mut W, segment: &Segment) -> io::Result<()> {
    if segment.is_unstyled() {
        return queue!(out, Print(&segment.text));
    }

    if segment.attrs.contains(Attr::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if segment.attrs.contains(Attr::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if let Some(color) = tone_color(segment.tone) {
        queue!(out, SetForegroundColor(color))?;
    }
    queue!(out, Print(&segment.text), SetAttribute(Attribute::Reset))
}

/// Render with ANSI styling into a string.
pub fn render_ansi(node: &LayoutNode) -> io::Result<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, &rows(node))?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

// =============================================================================
// Tests
// =============================================================================
