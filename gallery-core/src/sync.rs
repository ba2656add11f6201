//! SyncController: keeps the primary list and the thumbnail strip in
//! lock-step.
//!
//! Each list carries a gesture-ownership flag that is raised on touch-start
//! and lowered on momentum-end. A list's scroll handler only reacts while
//! that list is owned, so the programmatic scroll it issues on the other
//! list comes back as an unowned scroll event and is ignored there. That is
//! the whole feedback-loop guard; no other locking is involved since every
//! event arrives on the UI thread, one at a time.

use tracing::{debug, trace};

use crate::geometry::CarouselGeometry;
use crate::handle::{ListId, ScrollHandle};
use crate::scale::ScaleCurve;

#[derive(Debug, Clone)]
pub struct SyncController {
    geometry: CarouselGeometry,
    curve: ScaleCurve,
    primary_owned: bool,
    strip_owned: bool,
    /// Strip-space offset read by every thumbnail's scale interpolation.
    scale_value: f32,
}

impl SyncController {
    pub fn new(geometry: CarouselGeometry, curve: ScaleCurve) -> Self {
        Self {
            geometry,
            curve,
            primary_owned: false,
            strip_owned: false,
            scale_value: 0.0,
        }
    }

    pub fn geometry(&self) -> &CarouselGeometry {
        &self.geometry
    }

    pub fn curve(&self) -> ScaleCurve {
        self.curve
    }

    /// Window resize. Thumbnail metrics and item count never change.
    pub fn set_page_width(&mut self, page_width: f32) {
        if (self.geometry.page_width - page_width).abs() > f32::EPSILON {
            debug!(
                from = self.geometry.page_width,
                to = page_width,
                "page width changed"
            );
            self.geometry.page_width = page_width;
        }
    }

    pub fn is_owned(&self, list: ListId) -> bool {
        match list {
            ListId::Primary => self.primary_owned,
            ListId::Thumbnails => self.strip_owned,
        }
    }

    /// True while either list is being driven by the user.
    pub fn any_owned(&self) -> bool {
        self.primary_owned || self.strip_owned
    }

    pub fn scale_value(&self) -> f32 {
        self.scale_value
    }

    /// Scale for thumbnail `index` at the current scale value.
    pub fn thumbnail_scale(&self, index: usize) -> f32 {
        self.curve
            .scale_at(index, self.scale_value, self.geometry.thumb_stride())
    }

    /// Index the thumbnail strip is currently centered on.
    pub fn active_index(&self) -> usize {
        self.geometry.index_for(ListId::Thumbnails, self.scale_value)
    }

    pub fn touch_start(&mut self, list: ListId) {
        trace!(%list, "touch start");
        self.set_owned(list, true);
    }

    /// Route a scroll event to the handler of `list`; `other` is the
    /// handle of the opposite list. Returns the index the other list was
    /// moved to, if the event was a gesture.
    pub fn scrolled<H: ScrollHandle>(
        &mut self,
        list: ListId,
        offset: f32,
        other: &mut H,
    ) -> Option<usize> {
        match list {
            ListId::Primary => self.primary_scrolled(offset, other),
            ListId::Thumbnails => self.strip_scrolled(offset, other),
        }
    }

    /// Primary list scroll. While owned, the strip follows page by page
    /// without animation.
    pub fn primary_scrolled<H: ScrollHandle>(
        &mut self,
        offset: f32,
        strip: &mut H,
    ) -> Option<usize> {
        if !self.primary_owned {
            return None;
        }
        let index = self.geometry.index_for(ListId::Primary, offset);
        strip.scroll_to_index(index, false);
        Some(index)
    }

    /// Thumbnail strip scroll. While owned, the primary list jumps to the
    /// matching page and the raw offset drives the thumbnail scale.
    pub fn strip_scrolled<H: ScrollHandle>(
        &mut self,
        offset: f32,
        primary: &mut H,
    ) -> Option<usize> {
        if !self.strip_owned {
            return None;
        }
        let index = self.geometry.index_for(ListId::Thumbnails, offset);
        primary.scroll_to_index(index, false);
        self.scale_value = offset;
        Some(index)
    }

    pub fn momentum_end(&mut self, list: ListId, offset: f32) {
        match list {
            ListId::Primary => self.primary_momentum_end(offset),
            ListId::Thumbnails => self.strip_momentum_end(),
        }
    }

    /// End of a primary list gesture. The strip was moved programmatically,
    /// so its own handler never published a scale value; derive one from
    /// the final page offset.
    pub fn primary_momentum_end(&mut self, offset: f32) {
        self.set_owned(ListId::Primary, false);
        self.scale_value = self.geometry.primary_to_strip_offset(offset);
        debug!(offset, scale_value = self.scale_value, "primary settled");
    }

    pub fn strip_momentum_end(&mut self) {
        self.set_owned(ListId::Thumbnails, false);
        debug!(scale_value = self.scale_value, "thumbnails settled");
    }

    /// Programmatic selection (keyboard, thumbnail click). Both lists
    /// animate to `index`; ownership is left untouched.
    pub fn select<P, S>(
        &mut self,
        index: usize,
        primary: &mut P,
        strip: &mut S,
    ) -> usize
    where
        P: ScrollHandle,
        S: ScrollHandle,
    {
        let index = index.min(self.geometry.last_index());
        primary.scroll_to_index(index, true);
        strip.scroll_to_index(index, true);
        self.scale_value = self.geometry.offset_for(ListId::Thumbnails, index);
        debug!(index, "selected");
        index
    }

    fn set_owned(&mut self, list: ListId, owned: bool) {
        match list {
            ListId::Primary => self.primary_owned = owned,
            ListId::Thumbnails => self.strip_owned = owned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        offset: f32,
        calls: Vec<(usize, bool)>,
    }

    impl ScrollHandle for Recorder {
        fn scroll_to_index(&mut self, index: usize, animated: bool) {
            self.calls.push((index, animated));
        }

        fn current_offset(&self) -> f32 {
            self.offset
        }
    }

    fn controller() -> SyncController {
        SyncController::new(
            CarouselGeometry::new(10, 400.0, 50.0, 60.0, 6.0),
            ScaleCurve::default(),
        )
    }

    #[test]
    fn unowned_scroll_is_ignored() {
        let mut sync = controller();
        let mut primary = Recorder::default();
        assert_eq!(sync.strip_scrolled(168.0, &mut primary), None);
        assert!(primary.calls.is_empty());
        assert_eq!(sync.scale_value(), 0.0);
    }

    #[test]
    fn ownership_follows_touch_and_momentum() {
        let mut sync = controller();
        sync.touch_start(ListId::Primary);
        assert!(sync.is_owned(ListId::Primary));
        assert!(!sync.is_owned(ListId::Thumbnails));
        sync.momentum_end(ListId::Primary, 0.0);
        assert!(!sync.any_owned());
    }

    #[test]
    fn primary_momentum_end_recomputes_scale() {
        let mut sync = controller();
        sync.touch_start(ListId::Primary);
        sync.primary_momentum_end(1200.0);
        assert_eq!(sync.scale_value(), 168.0);
        assert_eq!(sync.active_index(), 3);
    }

    #[test]
    fn strip_momentum_end_keeps_scale() {
        let mut sync = controller();
        let mut primary = Recorder::default();
        sync.touch_start(ListId::Thumbnails);
        sync.strip_scrolled(112.0, &mut primary);
        sync.strip_momentum_end();
        assert_eq!(sync.scale_value(), 112.0);
        assert!(!sync.is_owned(ListId::Thumbnails));
    }

    #[test]
    fn select_clamps_and_animates_both() {
        let mut sync = controller();
        let mut primary = Recorder::default();
        let mut strip = Recorder::default();
        assert_eq!(sync.select(42, &mut primary, &mut strip), 9);
        assert_eq!(primary.calls, vec![(9, true)]);
        assert_eq!(strip.calls, vec![(9, true)]);
        assert_eq!(sync.scale_value(), 504.0);
        assert!(!sync.any_owned());
    }

    #[test]
    fn thumbnail_scale_uses_current_value() {
        let mut sync = controller();
        let mut primary = Recorder::default();
        sync.touch_start(ListId::Thumbnails);
        sync.strip_scrolled(224.0, &mut primary);
        assert!((sync.thumbnail_scale(4) - 1.3).abs() < 1e-5);
        assert!((sync.thumbnail_scale(3) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn resize_changes_page_stride_only() {
        let mut sync = controller();
        sync.set_page_width(800.0);
        assert_eq!(sync.geometry().page_stride(), 800.0);
        assert_eq!(sync.geometry().thumb_stride(), 56.0);
    }
}
