//! Live banner in the terminal.
//!
//! Run with: cargo run --example banner -- '<settings json>'
//!
//! With no argument a short demo countdown is used. Logs go to stderr.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use banner_timer::{
    mount, BannerConfig, BannerResult, BannerSettings, CountdownState, InlineRenderer,
    IntervalScheduler, StaticTranslations,
};

const DEMO_SETTINGS: &str = r#"{
    "text_block": "Your cart is <strong>reserved</strong>",
    "text_block_2": "<span>Hurry!</span> <i>Offer ends in</i>",
    "timer_time": 10,
    "text_color": "base"
}"#;

fn main() -> BannerResult<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let json = std::env::args().nth(1).unwrap_or_else(|| DEMO_SETTINGS.to_string());
    let config = BannerConfig::resolve(&BannerSettings::from_json(&json)?);
    let translations = StaticTranslations::new()
        .with("defaultText", "Your cart is reserved for")
        .with("defaultText2", "");

    let scheduler = IntervalScheduler::new();
    let renderer = Rc::new(RefCell::new(InlineRenderer::new()));
    let errors: Rc<RefCell<Option<io::Error>>> = Rc::new(RefCell::new(None));

    let frame_renderer = renderer.clone();
    let frame_errors = errors.clone();
    let handle = mount(config, &translations, &scheduler, move |layout| {
        let mut stdout = io::stdout();
        if let Err(e) = frame_renderer.borrow_mut().render(&mut stdout, layout) {
            frame_errors.borrow_mut().get_or_insert(e);
        }
    });

    while handle.state() == CountdownState::Running {
        scheduler.pump();
        if let Some(e) = errors.borrow_mut().take() {
            return Err(e.into());
        }
        thread::sleep(Duration::from_millis(50));
    }

    handle.unmount();
    println!();
    Ok(())
}
