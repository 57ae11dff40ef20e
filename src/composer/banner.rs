//! Banner component - mount, reactive re-render, unmount.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use banner_timer::composer::mount;
//! use banner_timer::i18n::StaticTranslations;
//! use banner_timer::renderer::render_plain;
//! use banner_timer::scheduler::ManualScheduler;
//! use banner_timer::settings::{BannerConfig, BannerSettings};
//!
//! let settings = BannerSettings::from_json(r#"{"text_block": "Ends in", "timer_time": 90}"#).unwrap();
//! let scheduler = ManualScheduler::new();
//!
//! let handle = mount(
//!     BannerConfig::resolve(&settings),
//!     &StaticTranslations::new(),
//!     &scheduler,
//!     |layout| println!("{}", render_plain(layout)),
//! );
//!
//! scheduler.advance(Duration::from_secs(1));
//! assert_eq!(handle.clock(), "1:29");
//! handle.unmount();
//! ```

use std::rc::Rc;

use spark_signals::{effect, flush_sync};
use tracing::debug;

use super::layout::LayoutNode;
use super::BannerTexts;
use crate::countdown::{CountdownController, CountdownState};
use crate::i18n::Translator;
use crate::scheduler::Scheduler;
use crate::settings::BannerConfig;

// =============================================================================
// Banner Handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Owns the countdown and the render effect. Unmounting (or dropping)
/// cancels the timer and stops re-rendering.
pub struct BannerHandle {
    countdown: CountdownController,
    config: Rc<BannerConfig>,
    texts: Rc<BannerTexts>,
    stop_effect: Option<Box<dyn FnOnce()>>,
}

impl BannerHandle {
    /// Seconds left on the countdown.
    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Formatted clock as currently displayed.
    pub fn clock(&self) -> String {
        self.countdown.clock()
    }

    pub fn state(&self) -> CountdownState {
        self.countdown.state()
    }

    /// True while the countdown timer is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.countdown.is_active()
    }

    /// Layout for the current countdown value.
    pub fn layout(&self) -> LayoutNode {
        self.texts.layout(&self.config, self.countdown.remaining())
    }

    /// Parsed text blocks.
    pub fn texts(&self) -> &BannerTexts {
        &self.texts
    }

    /// Cancel the timer and stop re-rendering.
    pub fn unmount(mut self) {
        self.release();
        debug!(remaining = self.countdown.remaining(), "banner unmounted");
    }

    fn release(&mut self) {
        self.countdown.stop();
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

impl Drop for BannerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount a banner.
///
/// This:
/// 1. Resolves and parses the text blocks (once)
/// 2. Creates the countdown from the configured duration
/// 3. Registers the render effect - `on_render` runs now and after every tick
/// 4. Starts the one-second timer on `scheduler`
pub fn mount(
    config: BannerConfig,
    translator: &dyn Translator,
    scheduler: &dyn Scheduler,
    mut on_render: impl FnMut(&LayoutNode) + 'static,
) -> BannerHandle {
    let texts = Rc::new(BannerTexts::resolve(&config, translator));
    let config = Rc::new(config);
    let mut countdown = CountdownController::new(config.timer_secs);

    let remaining = countdown.remaining_signal();
    let effect_texts = texts.clone();
    let effect_config = config.clone();
    let stop_fn = effect(move || {
        // Read the signal to subscribe to ticks
        let secs = remaining.get();
        let layout = effect_texts.layout(&effect_config, secs);
        on_render(&layout);
    });
    flush_sync();

    countdown.start(scheduler);
    debug!(
        timer_secs = config.timer_secs,
        two_lines = texts.two_lines,
        icon = config.icon.is_some(),
        "banner mounted"
    );

    BannerHandle {
        countdown,
        config,
        texts,
        stop_effect: Some(Box::new(stop_fn)),
    }
}

// =============================================================================
// Tests
// =============================================================================
