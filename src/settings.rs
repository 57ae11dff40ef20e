//! Host settings and their resolved form.
//!
//! [`BannerSettings`] mirrors the record the checkout host hands over: every
//! field optional, keywords as loose strings, the timer as whatever the
//! merchant typed. [`BannerConfig::resolve`] turns it into typed values with
//! the defaults applied.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::countdown::resolve_duration;
use crate::error::BannerResult;
use crate::types::{Align, Background, BorderStyle, BorderWidth, CornerRadius, Spacing, Tone};

/// Icon width used when the setting is missing or invalid.
pub const DEFAULT_ICON_WIDTH: u32 = 80;

// =============================================================================
// Raw settings
// =============================================================================

/// Settings record as supplied by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BannerSettings {
    pub text_block: Option<String>,
    pub text_block_2: Option<String>,
    /// Number or numeric string; see [`resolve_duration`].
    pub timer_time: Option<Value>,
    pub background_color: Option<String>,
    pub border_style: Option<String>,
    pub border_width: Option<String>,
    pub border_radius: Option<String>,
    pub padding_block: Option<String>,
    pub padding_inline: Option<String>,
    pub text_color: Option<String>,
    pub icon_source: Option<String>,
    pub icon_width: Option<Value>,
    pub banner_align_horizontal: Option<String>,
    pub banner_align_vertical: Option<String>,
}

impl BannerSettings {
    /// Decode the host's JSON settings record.
    pub fn from_json(json: &str) -> BannerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// Resolved config
// =============================================================================

/// Outer frame appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStyle {
    pub background: Background,
    pub border_style: BorderStyle,
    pub border_width: BorderWidth,
    pub border_radius: CornerRadius,
    pub padding_block: Spacing,
    pub padding_inline: Spacing,
}

/// Optional leading icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub source: String,
    /// Width in pixels.
    pub width: u32,
}

/// Settings with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    /// Raw first text block, markup included.
    pub text_block: String,
    /// Raw second text block, markup included.
    pub text_block_2: String,
    pub timer_secs: u32,
    pub text_tone: Tone,
    pub frame: FrameStyle,
    pub icon: Option<Icon>,
    pub align_horizontal: Align,
    pub align_vertical: Align,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self::resolve(&BannerSettings::default())
    }
}

impl BannerConfig {
    /// Apply defaults to a raw settings record.
    pub fn resolve(settings: &BannerSettings) -> Self {
        let icon = settings
            .icon_source
            .as_deref()
            .map(str::trim)
            .filter(|source| !source.is_empty())
            .map(|source| Icon {
                source: source.to_string(),
                width: normalize_image_size(settings.icon_width.as_ref(), DEFAULT_ICON_WIDTH),
            });

        Self {
            text_block: settings.text_block.clone().unwrap_or_default(),
            text_block_2: settings.text_block_2.clone().unwrap_or_default(),
            timer_secs: resolve_duration(settings.timer_time.as_ref()),
            text_tone: keyword(&settings.text_color, "text_color", Tone::from_keyword),
            frame: FrameStyle {
                background: keyword(&settings.background_color, "background_color", Background::from_keyword),
                border_style: keyword(&settings.border_style, "border_style", BorderStyle::from_keyword),
                border_width: keyword(&settings.border_width, "border_width", BorderWidth::from_keyword),
                border_radius: keyword(&settings.border_radius, "border_radius", CornerRadius::from_keyword),
                padding_block: keyword(&settings.padding_block, "padding_block", Spacing::from_keyword),
                padding_inline: keyword(&settings.padding_inline, "padding_inline", Spacing::from_keyword),
            },
            icon,
            align_horizontal: keyword(
                &settings.banner_align_horizontal,
                "banner_align_horizontal",
                Align::from_keyword,
            ),
            align_vertical: keyword(
                &settings.banner_align_vertical,
                "banner_align_vertical",
                Align::from_keyword,
            ),
        }
    }
}

/// Resolve a keyword setting, falling back to the type's default.
///
/// Empty strings count as unset; unknown keywords are logged.
fn keyword<T: Default>(raw: &Option<String>, field: &str, parse: fn(&str) -> Option<T>) -> T {
    let Some(value) = raw.as_deref().filter(|v| !v.trim().is_empty()) else {
        return T::default();
    };
    parse(value).unwrap_or_else(|| {
        warn!(field, value, "unknown keyword, using default");
        T::default()
    })
}

/// Normalize an image size setting to whole pixels.
///
/// Positive finite numbers (or numeric strings) are rounded; anything else
/// yields `default`.
pub fn normalize_image_size(raw: Option<&Value>, default: u32) -> u32 {
    let size = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match size {
        Some(px) if px.is_finite() && px >= 0.5 => px.round().min(f64::from(u32::MAX)) as u32,
        _ => default,
    }
}

// =============================================================================
// Tests
// =============================================================================
