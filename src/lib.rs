//! # banner-timer
//!
//! Promotional banner with an embedded countdown, for checkout surfaces.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals): the
//! remaining seconds are a signal, and the mounted banner re-renders through
//! an effect on every tick.
//!
//! ## Architecture
//!
//! ```text
//! settings/text --> markup::parse --> StyledNode tree --+
//!                                                       +--> composer --> LayoutNode --> renderer
//! scheduler ticks --> CountdownController --> m:ss -----+
//! ```
//!
//! ## Modules
//!
//! - [`markup`] - inline markup parser (`<i>`, `<strong>`, `<span>`)
//! - [`countdown`] - one-shot countdown state machine and clock formatting
//! - [`scheduler`] - recurring timers with guaranteed release
//! - [`settings`] - host settings record and resolved config
//! - [`i18n`] - injected translation lookup
//! - [`composer`] - layout tree and the mounted banner component
//! - [`renderer`] - plain, ANSI and inline terminal output

pub mod composer;
pub mod countdown;
pub mod error;
pub mod i18n;
pub mod markup;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{BannerError, BannerResult};

pub use markup::{parse, Parsed, SpanStyle, StyledNode};

pub use countdown::{
    format_time, resolve_duration, CountdownController, CountdownState, DEFAULT_DURATION_SECS,
};

pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler, TickCallback, TimerHandle};

pub use settings::{BannerConfig, BannerSettings};

pub use i18n::{StaticTranslations, Translator};

pub use composer::{compose, mount, BannerHandle, BannerTexts, LayoutNode, TextLine};

pub use renderer::{render_ansi, render_plain, InlineRenderer};
