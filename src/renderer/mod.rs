//! Terminal rendering of the banner layout.
//!
//! - [`segments`] - style inheritance down the span tree
//! - [`render_plain`] / [`render_ansi`] - one-shot renderings
//! - [`InlineRenderer`] - in-place re-rendering for live countdowns

mod inline;
mod segments;
mod text;

pub use inline::InlineRenderer;
pub use segments::{segments, Segment};
pub use text::{render_ansi, render_plain, rows, tone_color, write_rows, Row, ICON_GLYPH};
