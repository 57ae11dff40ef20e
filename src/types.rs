//! Core types for banner-timer.
//!
//! Text attributes, tones, and the layout keywords the host settings speak.
//! Keywords are parsed leniently: an unknown value resolves to `None` and the
//! caller picks the default, the same way the checkout host treats a missing
//! setting.

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for cheap inheritance and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

// =============================================================================
// Tone
// =============================================================================

/// Semantic text tone (the host's "appearance" keyword).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Inherit the surface's default text color.
    #[default]
    Base,
    Accent,
    Decorative,
    Interactive,
    Subdued,
    Info,
    Success,
    Warning,
    Critical,
}

impl Tone {
    /// Parse from a settings keyword (case-insensitive).
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Some(Self::Base),
            "accent" => Some(Self::Accent),
            "decorative" => Some(Self::Decorative),
            "interactive" => Some(Self::Interactive),
            "subdued" => Some(Self::Subdued),
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// True for the default tone, which lines leave unset.
    #[inline]
    pub const fn is_base(self) -> bool {
        matches!(self, Self::Base)
    }
}

// =============================================================================
// Frame keywords
// =============================================================================

/// Banner background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Base,
    Subdued,
    Transparent,
}

impl Background {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Some(Self::Base),
            "subdued" => Some(Self::Subdued),
            "transparent" => Some(Self::Transparent),
            _ => None,
        }
    }
}

/// Banner border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Base,
    Dashed,
    Dotted,
    None,
}

impl BorderStyle {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Some(Self::Base),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Banner border thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderWidth {
    #[default]
    Base,
    Medium,
    Thick,
}

impl BorderWidth {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Some(Self::Base),
            "medium" => Some(Self::Medium),
            "thick" => Some(Self::Thick),
            _ => None,
        }
    }
}

/// Corner rounding of the banner frame or an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerRadius {
    #[default]
    Base,
    None,
    Small,
    Large,
    FullyRounded,
    /// Fully circular; only used for the icon.
    Max,
}

impl CornerRadius {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Some(Self::Base),
            "none" => Some(Self::None),
            "small" => Some(Self::Small),
            "large" => Some(Self::Large),
            "fullyrounded" => Some(Self::FullyRounded),
            "max" => Some(Self::Max),
            _ => None,
        }
    }
}

/// Spacing scale used for padding and gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    None,
    ExtraTight,
    Tight,
    #[default]
    Base,
    Loose,
    ExtraLoose,
}

impl Spacing {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "extratight" => Some(Self::ExtraTight),
            "tight" => Some(Self::Tight),
            "base" => Some(Self::Base),
            "loose" => Some(Self::Loose),
            "extraloose" => Some(Self::ExtraLoose),
            _ => None,
        }
    }
}

/// Alignment of grid items on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
