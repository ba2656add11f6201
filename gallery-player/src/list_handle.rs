//! iced-backed [`ScrollHandle`] for one of the two carousel lists.
//!
//! Programmatic scrolls are recorded here and turned into `scroll_to`
//! tasks by the update loop; animated scrolls are driven by a
//! [`ScrollAnimator`] advanced on frame ticks.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use gallery_core::ScrollHandle;
use iced::Task;
use iced::widget::{Id as ScrollableId, operation::scroll_to, scrollable::AbsoluteOffset};

use crate::animator::{Easing, ScrollAnimator};
use crate::messages::Message;

/// Reported offsets closer than this to the last programmatic target are
/// treated as the widget echoing our own scroll.
const ECHO_EPSILON: f32 = 0.5;

/// Programmatic targets the widget may still report back.
const MAX_OUTSTANDING: usize = 8;

#[derive(Debug, Clone)]
pub struct ScrollableHandle {
    id: ScrollableId,
    stride: f32,
    item_count: usize,
    offset: f32,
    pending: Option<f32>,
    /// Issued targets not yet reported by the widget, oldest first.
    outstanding: VecDeque<f32>,
    animator: ScrollAnimator,
    animate_duration: Duration,
    last_activity: Option<Instant>,
}

impl ScrollableHandle {
    pub fn new(
        stride: f32,
        item_count: usize,
        animate_duration: Duration,
    ) -> Self {
        Self {
            id: ScrollableId::unique(),
            stride,
            item_count,
            offset: 0.0,
            pending: None,
            outstanding: VecDeque::new(),
            animator: ScrollAnimator::new(),
            animate_duration,
            last_activity: None,
        }
    }

    pub fn id(&self) -> &ScrollableId {
        &self.id
    }

    /// Resize: keep the same item aligned under the new stride.
    pub fn set_stride(&mut self, stride: f32) {
        if (self.stride - stride).abs() <= f32::EPSILON {
            return;
        }
        let index = self.current_index();
        self.stride = stride;
        self.animator.cancel();
        self.jump_to(self.offset_for(index));
    }

    pub fn current_index(&self) -> usize {
        gallery_core::offset_to_index(self.offset, self.stride, self.item_count)
    }

    fn offset_for(&self, index: usize) -> f32 {
        index.min(self.item_count.saturating_sub(1)) as f32 * self.stride
    }

    /// Record an offset reported by the widget. Returns `true` when the
    /// offset is an echo of our own programmatic scroll.
    ///
    /// The widget reports targets in the order they were issued, possibly
    /// a frame late, so an echo of an older target retires it and every
    /// target before it while the newest target stays the current offset.
    pub fn record_scroll(&mut self, offset: f32) -> bool {
        if let Some(pos) = self
            .outstanding
            .iter()
            .position(|target| (offset - target).abs() < ECHO_EPSILON)
        {
            self.outstanding.drain(..=pos);
            if self.outstanding.is_empty() {
                self.offset = offset;
            }
            return true;
        }

        // Frames reported mid-animation can lag behind the animator.
        let echo = (offset - self.offset).abs() < ECHO_EPSILON
            || self.animator.spans(offset, ECHO_EPSILON);
        self.offset = offset;
        echo
    }

    /// Note user activity (touch or gesture scroll) at `now`.
    pub fn mark_activity(&mut self, now: Instant) {
        self.last_activity = Some(now);
    }

    /// Time since the last gesture activity.
    pub fn quiet_for(&self, now: Instant) -> Option<Duration> {
        self.last_activity
            .map(|at| now.saturating_duration_since(at))
    }

    pub fn clear_activity(&mut self) {
        self.last_activity = None;
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn cancel_animation(&mut self) {
        self.animator.cancel();
    }

    /// Tween to an absolute offset.
    pub fn animate_to(&mut self, target: f32, duration: Duration) {
        if (target - self.offset).abs() < ECHO_EPSILON {
            self.animator.cancel();
            self.jump_to(target);
            return;
        }
        self.animator
            .start(self.offset, target, duration, Easing::EaseOut);
    }

    /// Advance the animator. Returns the new offset and whether the
    /// animation finished on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<(f32, bool)> {
        let next = self.animator.tick_at(now)?;
        self.issue(next);
        self.offset = next;
        Some((next, !self.animator.is_active()))
    }

    fn jump_to(&mut self, offset: f32) {
        if (offset - self.offset).abs() >= ECHO_EPSILON || self.pending.is_some() {
            self.issue(offset);
        }
        self.offset = offset;
    }

    fn issue(&mut self, offset: f32) {
        self.pending = Some(offset);
        if self.outstanding.len() == MAX_OUTSTANDING {
            self.outstanding.pop_front();
        }
        self.outstanding.push_back(offset);
    }

    /// Emit the pending programmatic scroll, if any.
    pub fn take_task(&mut self) -> Task<Message> {
        match self.pending.take() {
            Some(x) => scroll_to::<Message>(
                self.id.clone(),
                AbsoluteOffset { x, y: 0.0 },
            ),
            None => Task::none(),
        }
    }
}

impl ScrollHandle for ScrollableHandle {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        let target = self.offset_for(index);
        if animated {
            let duration = self.animate_duration;
            self.animate_to(target, duration);
        } else {
            self.animator.cancel();
            self.jump_to(target);
        }
    }

    fn current_offset(&self) -> f32 {
        self.offset
    }
}
