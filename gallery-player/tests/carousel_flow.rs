use std::sync::Arc;
use std::time::{Duration, Instant};

use gallery_core::{ListId, ScrollHandle};
use gallery_player::config::Config;
use gallery_player::image_loader::{ImageSlot, LoadError};
use gallery_player::messages::{Message, Navigation};
use gallery_player::state::Gallery;
use gallery_player::update;
use iced::widget::image::Handle;

const PAGE: f32 = 390.0;
const STRIDE: f32 = 56.0;

fn mount() -> Gallery {
    let config = Config {
        images: (0..10).map(|i| format!("image-{i}.png")).collect(),
        window_width: PAGE,
        ..Config::default()
    };
    Gallery::new(Arc::new(config))
}

fn later(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

#[test]
fn strip_swipe_to_last_item_end_to_end() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::touch_start(&mut gallery, ListId::Thumbnails, t0);
    let _ = update::scrolled(&mut gallery, ListId::Thumbnails, 504.0, later(t0, 16));
    assert_eq!(gallery.current_page(), 9);
    assert_eq!(gallery.sync.scale_value(), 504.0);

    // quiet past the settle window, already aligned: momentum ends
    let _ = update::tick(&mut gallery, later(t0, 1_000));
    assert!(!gallery.sync.is_owned(ListId::Thumbnails));
    assert_eq!(gallery.current_page(), 9);
    assert_eq!(gallery.sync.scale_value(), 504.0);
    assert!(!gallery.needs_frames());
}

#[test]
fn first_foreign_scroll_counts_as_touch_start() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::scrolled(&mut gallery, ListId::Thumbnails, 168.0, t0);
    assert!(gallery.sync.is_owned(ListId::Thumbnails));
    assert_eq!(gallery.current_page(), 3);
}

#[test]
fn programmatic_echo_does_not_feed_back() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::scrolled(&mut gallery, ListId::Primary, 2.0 * PAGE, t0);
    assert!(gallery.sync.is_owned(ListId::Primary));
    assert_eq!(gallery.strip.current_offset(), 2.0 * STRIDE);

    // the strip reports the offset we just scrolled it to
    let _ = update::scrolled(&mut gallery, ListId::Thumbnails, 2.0 * STRIDE, later(t0, 5));
    assert!(!gallery.sync.is_owned(ListId::Thumbnails));
    assert_eq!(gallery.primary.current_offset(), 2.0 * PAGE);
    assert_eq!(gallery.sync.scale_value(), 0.0);
}

#[test]
fn late_echo_of_earlier_target_does_not_feed_back() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::scrolled(&mut gallery, ListId::Primary, 2.0 * PAGE, t0);
    let _ = update::scrolled(&mut gallery, ListId::Primary, 3.0 * PAGE, later(t0, 16));
    assert_eq!(gallery.strip.current_offset(), 3.0 * STRIDE);

    // the strip only now reports the first of the two targets
    let _ = update::scrolled(&mut gallery, ListId::Thumbnails, 2.0 * STRIDE, later(t0, 20));
    assert!(!gallery.sync.is_owned(ListId::Thumbnails));
    assert_eq!(gallery.primary.current_offset(), 3.0 * PAGE);
    assert_eq!(gallery.strip.current_offset(), 3.0 * STRIDE);
}

#[test]
fn gesture_during_snap_cancels_it() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::scrolled(&mut gallery, ListId::Primary, 500.0, t0);
    let _ = update::tick(&mut gallery, later(t0, 1_000));
    assert!(gallery.primary.is_animating());

    // user drags past the snap path
    let _ = update::scrolled(&mut gallery, ListId::Primary, 900.0, later(t0, 1_010));
    assert!(!gallery.primary.is_animating());
    assert!(gallery.sync.is_owned(ListId::Primary));
    assert_eq!(gallery.primary.current_offset(), 900.0);
    assert_eq!(gallery.strip.current_offset(), 2.0 * STRIDE);

    // next frame inside the settle window leaves the user's offset alone
    let _ = update::tick(&mut gallery, later(t0, 1_050));
    assert_eq!(gallery.primary.current_offset(), 900.0);
    assert!(gallery.sync.is_owned(ListId::Primary));
}

#[test]
fn gesture_during_selection_takes_over() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::update(&mut gallery, Message::Navigate(Navigation::Next));
    assert!(gallery.strip.is_animating());

    let _ = update::scrolled(&mut gallery, ListId::Thumbnails, 300.0, t0);
    assert!(!gallery.strip.is_animating());
    assert!(!gallery.primary.is_animating());
    assert!(gallery.sync.is_owned(ListId::Thumbnails));
    assert_eq!(gallery.strip.current_offset(), 300.0);
    assert_eq!(gallery.primary.current_offset(), 5.0 * PAGE);
}

#[test]
fn primary_gesture_snaps_to_page_then_updates_scale() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::scrolled(&mut gallery, ListId::Primary, 500.0, t0);
    assert_eq!(gallery.strip.current_offset(), STRIDE);

    // settle: snap animation toward page 1 starts, still owned
    let _ = update::tick(&mut gallery, later(t0, 1_000));
    assert!(gallery.primary.is_animating());
    assert!(gallery.sync.is_owned(ListId::Primary));

    // snap finishes: momentum end publishes the strip-space offset
    let _ = update::tick(&mut gallery, later(t0, 5_000));
    assert!(!gallery.sync.any_owned());
    assert_eq!(gallery.primary.current_offset(), PAGE);
    assert!((gallery.sync.scale_value() - STRIDE).abs() < 1e-3);
    assert!((gallery.sync.thumbnail_scale(1) - 1.3).abs() < 1e-4);
}

#[test]
fn gesture_stays_owned_while_active() {
    let mut gallery = mount();
    let t0 = Instant::now();

    let _ = update::scrolled(&mut gallery, ListId::Thumbnails, 30.0, t0);
    let _ = update::scrolled(&mut gallery, ListId::Thumbnails, 60.0, later(t0, 50));
    let _ = update::tick(&mut gallery, later(t0, 100));
    assert!(gallery.sync.is_owned(ListId::Thumbnails));
    assert!(!gallery.strip.is_animating());
}

#[test]
fn keyboard_navigation_moves_both_lists() {
    let mut gallery = mount();

    let _ = update::update(&mut gallery, Message::Navigate(Navigation::Next));
    assert!(gallery.primary.is_animating());
    assert!(gallery.strip.is_animating());
    assert!(!gallery.sync.any_owned());
    assert_eq!(gallery.sync.scale_value(), STRIDE);

    let _ = update::tick(&mut gallery, Instant::now() + Duration::from_secs(5));
    assert_eq!(gallery.current_page(), 1);
    assert_eq!(gallery.strip.current_offset(), STRIDE);

    let _ = update::update(&mut gallery, Message::Navigate(Navigation::Last));
    let _ = update::tick(&mut gallery, Instant::now() + Duration::from_secs(5));
    assert_eq!(gallery.current_page(), 9);

    let _ = update::update(&mut gallery, Message::Navigate(Navigation::Next));
    let _ = update::tick(&mut gallery, Instant::now() + Duration::from_secs(5));
    assert_eq!(gallery.current_page(), 9);

    let _ = update::update(&mut gallery, Message::Navigate(Navigation::First));
    let _ = update::tick(&mut gallery, Instant::now() + Duration::from_secs(5));
    assert_eq!(gallery.current_page(), 0);
    assert_eq!(gallery.sync.scale_value(), 0.0);
}

#[test]
fn thumbnail_click_selects() {
    let mut gallery = mount();
    let _ = update::update(&mut gallery, Message::ThumbnailPressed(4));
    let _ = update::tick(&mut gallery, Instant::now() + Duration::from_secs(5));
    assert_eq!(gallery.current_page(), 4);
    assert_eq!(gallery.sync.active_index(), 4);
}

#[test]
fn resize_keeps_current_page() {
    let mut gallery = mount();
    let _ = update::update(&mut gallery, Message::ThumbnailPressed(3));
    let _ = update::tick(&mut gallery, Instant::now() + Duration::from_secs(5));

    let _ = update::resized(&mut gallery, 800.0);
    assert_eq!(gallery.sync.geometry().page_width, 800.0);
    assert_eq!(gallery.primary.current_offset(), 2400.0);
    assert_eq!(gallery.current_page(), 3);
}

#[test]
fn failed_image_is_recorded() {
    let mut gallery = mount();
    let err = LoadError::Status {
        uri: "https://example.com/x.jpg".into(),
        status: 404,
    };
    let _ = update::update(&mut gallery, Message::ImageLoaded(2, Err(err.clone())));
    assert!(matches!(&gallery.slots[2], ImageSlot::Failed(e) if *e == err));
    assert!(matches!(gallery.slots[0], ImageSlot::Loading));

    // out of range results are ignored
    let _ = update::update(&mut gallery, Message::ImageLoaded(99, Err(err)));
    assert_eq!(gallery.slots.len(), 10);
}

#[test]
fn placeholders_render_as_scalable_images() {
    let mut gallery = mount();
    let loading = gallery.thumbnail_handle(&gallery.slots[0]).id();
    let err = LoadError::Timeout {
        uri: "https://example.com/slow.jpg".into(),
    };
    let _ = update::update(&mut gallery, Message::ImageLoaded(1, Err(err)));
    let failed = gallery.thumbnail_handle(&gallery.slots[1]).id();
    assert_ne!(loading, failed);
    assert_eq!(gallery.thumbnail_handle(&gallery.slots[2]).id(), loading);

    let handle = Handle::from_path("image-3.png");
    let _ = update::update(&mut gallery, Message::ImageLoaded(3, Ok(handle.clone())));
    assert_eq!(gallery.thumbnail_handle(&gallery.slots[3]).id(), handle.id());
}

#[test]
fn empty_gallery_ignores_selection() {
    let config = Config {
        images: Vec::new(),
        ..Config::default()
    };
    let mut gallery = Gallery::new(Arc::new(config));
    let _ = update::update(&mut gallery, Message::Navigate(Navigation::Next));
    assert!(!gallery.needs_frames());
}
