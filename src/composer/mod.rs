//! Composer - settings, parsed text and clock arranged into a layout tree.
//!
//! Layout rules:
//!
//! - Both text blocks blank: use the translated default texts.
//! - Second block has content: two lines, the clock ends the second.
//! - Otherwise: one line, the clock ends it.
//! - With an icon the content sits in a grid next to a fixed-width image.

use crate::countdown::format_time;
use crate::i18n::{Translator, DEFAULT_TEXT_2_KEY, DEFAULT_TEXT_KEY};
use crate::markup::{parse, Parsed, StyledNode};
use crate::settings::BannerConfig;
use crate::types::{CornerRadius, Spacing};

mod banner;
mod layout;

pub use banner::{mount, BannerHandle};
pub use layout::{GridColumns, LayoutNode, TextLine};

// =============================================================================
// Texts
// =============================================================================

/// The banner's text blocks, parsed once per mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerTexts {
    pub first: Option<Parsed>,
    pub second: Option<Parsed>,
    /// True when the second block has non-whitespace content.
    pub two_lines: bool,
}

impl BannerTexts {
    /// Pick the text blocks (settings or translated defaults) and parse them.
    pub fn resolve(config: &BannerConfig, translator: &dyn Translator) -> Self {
        let both_blank = config.text_block.trim().is_empty() && config.text_block_2.trim().is_empty();

        let (first, second) = if both_blank {
            (
                translator.translate(DEFAULT_TEXT_KEY),
                translator.translate(DEFAULT_TEXT_2_KEY),
            )
        } else {
            (config.text_block.clone(), config.text_block_2.clone())
        };

        Self {
            first: parse(&first),
            second: parse(&second),
            two_lines: !second.trim().is_empty(),
        }
    }

    /// Build the layout for the given remaining seconds.
    pub fn layout(&self, config: &BannerConfig, remaining_secs: u32) -> LayoutNode {
        let tone = Some(config.text_tone).filter(|tone| !tone.is_base());
        let clock = format_time(remaining_secs);

        let mut first = TextLine::new(tone);
        first.content = nodes_of(&self.first);

        let content = if self.two_lines {
            let mut second = TextLine::new(tone);
            second.content = nodes_of(&self.second);
            second.push_clock(&clock);
            LayoutNode::Stack {
                frame: None,
                gap: Spacing::None,
                children: vec![LayoutNode::Text(first), LayoutNode::Text(second)],
            }
        } else {
            first.push_clock(&clock);
            LayoutNode::Text(first)
        };

        let body = match &config.icon {
            Some(icon) => LayoutNode::Grid {
                columns: GridColumns::FixedThenAuto(icon.width),
                justify_items: config.align_horizontal,
                align_items: config.align_vertical,
                gap: Spacing::Base,
                children: vec![
                    LayoutNode::Frame {
                        inline_size: icon.width,
                        child: Box::new(LayoutNode::Image {
                            source: icon.source.clone(),
                            aspect_ratio: 1,
                            radius: CornerRadius::Max,
                        }),
                    },
                    content,
                ],
            },
            None => content,
        };

        LayoutNode::Stack {
            frame: Some(config.frame),
            gap: Spacing::Base,
            children: vec![body],
        }
    }
}

fn nodes_of(parsed: &Option<Parsed>) -> Vec<StyledNode> {
    parsed
        .as_ref()
        .map(|parsed| parsed.nodes().to_vec())
        .unwrap_or_default()
}

/// Compose the banner layout in one shot.
pub fn compose(config: &BannerConfig, translator: &dyn Translator, remaining_secs: u32) -> LayoutNode {
    BannerTexts::resolve(config, translator).layout(config, remaining_secs)
}

// =============================================================================
// Tests
// =============================================================================
