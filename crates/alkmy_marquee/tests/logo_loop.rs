//! End-to-end behaviour of the logo loop through its public API

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use alkmy_animation::FrameLoop;
use alkmy_core::{Direction, Size};
use alkmy_marquee::{copy_count, LogoLoop, LogoLoopConfig, LoopState, Measurement, Observer};

const FRAME: f32 = 1.0 / 60.0;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("alkmy_marquee=debug")
        .with_test_writer()
        .try_init();
}

fn partners() -> LogoLoopConfig {
    LogoLoopConfig::from_toml_str(
        r#"
        speed = 120
        direction = "left"

        [[items]]
        src = "/logos/reddit.svg"
        alt = "Reddit"
        href = "https://reddit.com"

        [[items]]
        src = "/logos/appstore.svg"
        alt = "App Store"

        [[items]]
        node = "playstore"
        "#,
    )
    .expect("valid config")
}

#[test]
fn test_offset_advances_speed_per_second_after_convergence() {
    init_tracing();
    let measurement = Measurement::new(Size::new(1200.0, 40.0), Size::new(1000.0, 28.0));
    let mut logos = LogoLoop::new(partners(), measurement);
    logos.mount();

    for _ in 0..(60 * 3) {
        logos.tick(FRAME);
    }
    let before = logos.offset();
    logos.tick(1.0);
    let advanced = (logos.offset() - before).rem_euclid(1000.0);

    assert!((advanced - 120.0).abs() < 0.05, "advanced {advanced}");
    assert!((0.0..1000.0).contains(&logos.offset()));
}

#[test]
fn test_hover_decays_to_37_percent_after_one_tau() {
    init_tracing();
    let measurement = Measurement::new(Size::new(1200.0, 40.0), Size::new(1000.0, 28.0));
    let mut logos = LogoLoop::new(partners().with_hover_speed(0.0), measurement);
    logos.mount();
    for _ in 0..(60 * 4) {
        logos.tick(FRAME);
    }
    let v0 = logos.velocity();

    logos.pointer_enter();
    for _ in 0..25 {
        logos.tick(0.01);
    }

    let ratio = logos.velocity() / v0;
    assert!((ratio - 0.37).abs() < 0.01, "ratio {ratio}");
}

#[test]
fn test_right_direction_keeps_offset_in_range() {
    let config = partners().with_direction(Direction::Right).with_speed(900.0);
    let measurement = Measurement::new(Size::new(800.0, 40.0), Size::new(333.3, 28.0));
    let mut logos = LogoLoop::new(config, measurement);
    logos.mount();

    for _ in 0..2000 {
        logos.tick(FRAME);
        let extent = logos.sequence_extent();
        if extent > 0.0 {
            assert!((0.0..extent).contains(&logos.offset()));
        }
    }
    assert!(logos.velocity() < 0.0);
    assert_eq!(logos.sequence_extent(), 334.0);
}

#[test]
fn test_copy_scenario() {
    assert_eq!(copy_count(1200.0, 400.0), 5);
    assert_eq!(copy_count(1200.0, 0.0), 2);
}

#[test]
fn test_images_loading_late_resizes_sequence() {
    init_tracing();
    let sequence = Rc::new(Cell::new(0.0f32));
    let s = Rc::clone(&sequence);
    let source = move || Measurement::new(Size::new(1200.0, 40.0), Size::new(s.get(), 28.0));

    let mut logos = LogoLoop::new(partners(), source);
    logos.mount();
    logos.tick(FRAME);
    assert_eq!(logos.state(), LoopState::Idle);
    assert_eq!(logos.copy_count(), 2);

    // Images arrive: one loads, one errors
    sequence.set(300.0);
    logos.image_settled();
    logos.image_settled();
    logos.tick(FRAME);

    assert_eq!(logos.state(), LoopState::Running);
    assert_eq!(logos.sequence_extent(), 300.0);
    assert_eq!(logos.copy_count(), 6);
}

#[test]
fn test_remeasure_with_unchanged_layout_is_noop() {
    let measurement = Measurement::new(Size::new(1200.0, 40.0), Size::new(400.0, 28.0));
    let mut logos = LogoLoop::new(partners(), measurement);
    logos.mount();
    logos.tick(FRAME);
    let extent = logos.sequence_extent();
    let copies = logos.copy_count();

    logos.on_resize();
    logos.tick(FRAME);
    logos.on_resize();
    logos.tick(FRAME);

    assert_eq!(logos.sequence_extent(), extent);
    assert_eq!(logos.copy_count(), copies);
}

#[test]
fn test_rendered_copies_describe_duplicates() {
    let measurement = Measurement::new(Size::new(1200.0, 40.0), Size::new(400.0, 28.0));
    let mut logos = LogoLoop::new(partners(), measurement);
    logos.mount();
    logos.tick(FRAME);

    let copies = logos.copies();
    assert_eq!(copies.len(), 5);
    assert!(!copies[0].aria_hidden);
    assert!(copies[1..].iter().all(|c| c.aria_hidden));
    assert_eq!(copies[0].items[0].link_label, Some("Reddit"));
    assert_eq!(copies[4].items[2].key, "4-2");
}

#[test]
fn test_empty_item_list_renders_and_stays_idle() {
    let measurement = Measurement::new(Size::new(1200.0, 40.0), Size::ZERO);
    let mut logos = LogoLoop::new(LogoLoopConfig::default(), measurement);
    logos.mount();
    for _ in 0..120 {
        logos.tick(FRAME);
    }
    assert_eq!(logos.state(), LoopState::Idle);
    assert_eq!(logos.offset(), 0.0);
    assert!(logos.copies().iter().all(|c| c.items.is_empty()));
}

#[test]
fn test_two_loops_share_a_frame_loop() {
    let measurement = Measurement::new(Size::new(1200.0, 40.0), Size::new(400.0, 28.0));
    let left = Rc::new(RefCell::new(LogoLoop::new(partners(), measurement)));
    let up = Rc::new(RefCell::new(LogoLoop::new(
        partners().with_direction(Direction::Up),
        Measurement::new(Size::new(100.0, 600.0), Size::new(100.0, 250.0)),
    )));
    left.borrow_mut().mount();
    up.borrow_mut().mount();

    let mut frames = FrameLoop::new();
    let left_id = LogoLoop::attach(&left, &mut frames);
    LogoLoop::attach(&up, &mut frames);

    let mut timestamp = 0.0;
    for _ in 0..60 {
        frames.tick_at(timestamp);
        timestamp += 1000.0 / 60.0;
    }
    assert!(left.borrow().offset() > 0.0);
    assert_eq!(up.borrow().transform().translation_part().x, 0.0);
    assert!(up.borrow().transform().translation_part().y < 0.0);

    LogoLoop::detach(&left, &mut frames, left_id);
    let frozen = left.borrow().offset();
    for _ in 0..10 {
        frames.tick_at(timestamp);
        timestamp += 1000.0 / 60.0;
    }
    assert_eq!(left.borrow().offset(), frozen);
    assert_eq!(frames.callback_count(), 1);
}
