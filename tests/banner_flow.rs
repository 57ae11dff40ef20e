//! End-to-end banner behaviour: settings JSON in, rendered frames out.
//!
//! Time is driven by `ManualScheduler`, so every assertion is exact.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use banner_timer::markup::{parse, Parsed, SpanStyle, StyledNode};
use banner_timer::{
    compose, format_time, mount, render_plain, BannerConfig, BannerSettings, CountdownController,
    CountdownState, ManualScheduler, StaticTranslations,
};

fn translations() -> StaticTranslations {
    StaticTranslations::new()
        .with("defaultText", "Your cart is reserved for")
        .with("defaultText2", "")
}

fn config(json: &str) -> BannerConfig {
    BannerConfig::resolve(&BannerSettings::from_json(json).expect("valid settings"))
}

// =============================================================================
// Parser properties
// =============================================================================

#[test]
fn unmarked_text_parses_to_itself() {
    for input in ["a", "Sale ends soon", "<b>not a marker</b>", "1 < 2 > 0"] {
        assert_eq!(parse(input), Some(Parsed::Node(StyledNode::text(input))));
    }
    assert_eq!(parse(""), None);
}

#[test]
fn documented_parse_shapes() {
    assert_eq!(
        parse("<strong>a</strong>b"),
        Some(Parsed::Nodes(vec![
            StyledNode::span(SpanStyle::Strong, vec![StyledNode::text("a")]),
            StyledNode::text("b"),
        ]))
    );
    assert_eq!(
        parse("<i>x<strong>y</strong>z</i>"),
        Some(Parsed::Node(StyledNode::span(
            SpanStyle::Emphasis,
            vec![
                StyledNode::text("x"),
                StyledNode::span(SpanStyle::Strong, vec![StyledNode::text("y")]),
                StyledNode::text("z"),
            ],
        )))
    );
    assert_eq!(
        parse("<i>abc"),
        Some(Parsed::Node(StyledNode::span(
            SpanStyle::Emphasis,
            vec![StyledNode::text("abc")]
        )))
    );
}

// =============================================================================
// Countdown properties
// =============================================================================

#[test]
fn countdown_from_three() {
    let scheduler = ManualScheduler::new();
    let mut countdown = CountdownController::new(3);
    countdown.start(&scheduler);

    let mut seen = Vec::new();
    for _ in 0..5 {
        scheduler.advance(Duration::from_secs(1));
        seen.push((countdown.remaining(), countdown.clock(), countdown.state()));
    }

    assert_eq!(
        seen,
        vec![
            (2, "0:02".to_string(), CountdownState::Running),
            (1, "0:01".to_string(), CountdownState::Running),
            (0, "0:00".to_string(), CountdownState::Expired),
            (0, "0:00".to_string(), CountdownState::Expired),
            (0, "0:00".to_string(), CountdownState::Expired),
        ]
    );
}

#[test]
fn clock_formatting() {
    assert_eq!(format_time(0), "0:00");
    assert_eq!(format_time(65), "1:05");
    assert_eq!(format_time(900), "15:00");
}

// =============================================================================
// Mounted banner
// =============================================================================

#[test]
fn mounted_banner_counts_down_in_place() {
    let scheduler = ManualScheduler::new();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = frames.clone();

    let handle = mount(
        config(r#"{"text_block": "<strong>Hurry</strong>", "text_block_2": "<i>ends in</i>", "timer_time": "2"}"#),
        &translations(),
        &scheduler,
        move |layout| sink.borrow_mut().push(render_plain(layout)),
    );
    scheduler.advance(Duration::from_secs(3));
    handle.unmount();

    assert_eq!(
        *frames.borrow(),
        vec![
            "Hurry\nends in 0:02".to_string(),
            "Hurry\nends in 0:01".to_string(),
            "Hurry\nends in 0:00".to_string(),
        ]
    );
    assert_eq!(scheduler.active_timers(), 0);
}

#[test]
fn defaults_apply_when_settings_are_blank() {
    let layout = compose(&config(r#"{"text_block": " ", "timer_time": 0}"#), &translations(), 900);
    assert_eq!(render_plain(&layout), "Your cart is reserved for 15:00");

    let resolved = config(r#"{"timer_time": "soon"}"#);
    assert_eq!(resolved.timer_secs, 900);
}

#[test]
fn teardown_before_first_tick_fires_nothing() {
    let scheduler = ManualScheduler::new();
    let renders = Rc::new(RefCell::new(0));
    let counter = renders.clone();

    let handle = mount(config(r#"{"text_block": "x"}"#), &translations(), &scheduler, move |_| {
        *counter.borrow_mut() += 1;
    });
    drop(handle);
    scheduler.advance(Duration::from_secs(30));

    assert_eq!(scheduler.fired(), 0);
    assert_eq!(*renders.borrow(), 1);
}

#[test]
fn settings_errors_surface() {
    let err = BannerSettings::from_json(r#"{"timer_time": 10,"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid banner settings"));
}
