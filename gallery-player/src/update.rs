//! Message dispatch: host events in, controller calls, programmatic
//! scrolls out.
//!
//! iced has no touch-start or momentum-end callbacks for scrollables, so
//! both are synthesized here. A scroll event that is not an echo of our own
//! `scroll_to` counts as the start of a gesture; a gesture that has been
//! quiet for `motion.settle_ms` is snapped to the nearest page or thumbnail
//! (still owned, so the other list keeps following) and then ended.

use std::time::Instant;

use gallery_core::{ListId, ScrollHandle};
use iced::Task;

use crate::image_loader::ImageSlot;
use crate::messages::{Message, Navigation};
use crate::state::Gallery;

/// Offsets closer than this to their snap target are considered aligned.
const SNAP_EPSILON: f32 = 0.5;

pub fn update(state: &mut Gallery, message: Message) -> Task<Message> {
    match message {
        Message::TouchStart(list) => touch_start(state, list, Instant::now()),
        Message::Scrolled(list, viewport) => {
            scrolled(state, list, viewport.absolute_offset().x, Instant::now())
        }
        Message::ThumbnailPressed(index) => select(state, index),
        Message::Navigate(nav) => navigate(state, nav),
        Message::Tick(now) => tick(state, now),
        Message::WindowResized(size) => resized(state, size.width),
        Message::ImageLoaded(index, result) => {
            image_loaded(state, index, result);
            Task::none()
        }
    }
}

pub fn touch_start(state: &mut Gallery, list: ListId, now: Instant) -> Task<Message> {
    let (sync, this, _) = state.handles_mut(list);
    this.cancel_animation();
    this.mark_activity(now);
    sync.touch_start(list);
    Task::none()
}

pub fn scrolled(
    state: &mut Gallery,
    list: ListId,
    offset: f32,
    now: Instant,
) -> Task<Message> {
    let (sync, this, other) = state.handles_mut(list);
    let echo = this.record_scroll(offset);
    if !echo {
        // The user took over: a running snap or selection tween must not
        // drag the list back.
        this.cancel_animation();
        if !sync.is_owned(list) {
            log::trace!("Gesture started on {list} list at {offset}");
            sync.touch_start(list);
        }
        this.mark_activity(now);
    }
    sync.scrolled(list, offset, other);
    state.flush()
}

pub fn tick(state: &mut Gallery, now: Instant) -> Task<Message> {
    advance(state, ListId::Primary, now);
    advance(state, ListId::Thumbnails, now);
    state.flush()
}

fn advance(state: &mut Gallery, list: ListId, now: Instant) {
    let settle = state.config.motion.settle();
    let snap = state.config.motion.snap();
    let (sync, this, other) = state.handles_mut(list);

    if let Some((offset, finished)) = this.tick(now) {
        if sync.is_owned(list) {
            sync.scrolled(list, offset, other);
            if finished {
                sync.momentum_end(list, offset);
                this.clear_activity();
            }
        }
        return;
    }

    if !sync.is_owned(list) {
        return;
    }
    let settled = this.quiet_for(now).is_none_or(|quiet| quiet >= settle);
    if !settled {
        return;
    }

    let offset = this.current_offset();
    let target = sync.geometry().snap_offset(list, offset);
    if (target - offset).abs() < SNAP_EPSILON {
        sync.momentum_end(list, offset);
        this.clear_activity();
    } else {
        log::trace!("Snapping {list} list from {offset} to {target}");
        this.animate_to(target, snap);
    }
}

pub fn select(state: &mut Gallery, index: usize) -> Task<Message> {
    if state.is_empty() {
        return Task::none();
    }
    let (sync, primary, strip) = state.handles_mut(ListId::Primary);
    sync.select(index, primary, strip);
    state.flush()
}

pub fn navigate(state: &mut Gallery, nav: Navigation) -> Task<Message> {
    let current = state.current_page();
    let last = state.len().saturating_sub(1);
    let target = match nav {
        Navigation::Next => (current + 1).min(last),
        Navigation::Previous => current.saturating_sub(1),
        Navigation::First => 0,
        Navigation::Last => last,
    };
    select(state, target)
}

pub fn resized(state: &mut Gallery, width: f32) -> Task<Message> {
    if width <= 0.0 {
        return Task::none();
    }
    state.sync.set_page_width(width);
    let stride = state.sync.geometry().page_stride();
    state.primary.set_stride(stride);
    state.flush()
}

fn image_loaded(
    state: &mut Gallery,
    index: usize,
    result: Result<iced::widget::image::Handle, crate::image_loader::LoadError>,
) {
    let Some(slot) = state.slots.get_mut(index) else {
        log::warn!("Image result for unknown index {index}");
        return;
    };
    *slot = match result {
        Ok(handle) => ImageSlot::Loaded(handle),
        Err(e) => {
            log::warn!("Failed to load image {index}: {e}");
            ImageSlot::Failed(e)
        }
    };
}
