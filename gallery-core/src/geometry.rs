//! Layout metrics shared by both lists and the offset/index conversions.

use crate::handle::ListId;

/// Smallest stride used for any division. Zero-width layouts (e.g. before
/// the first resize event) still map every offset to index 0.
const MIN_STRIDE: f32 = 1.0;

/// Static layout of the carousel.
///
/// `page_width` is the only field expected to change during the component's
/// lifetime (window resize); the item count is fixed at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselGeometry {
    pub item_count: usize,
    pub page_width: f32,
    pub thumb_width: f32,
    pub thumb_height: f32,
    pub spacing: f32,
}

impl CarouselGeometry {
    pub fn new(
        item_count: usize,
        page_width: f32,
        thumb_width: f32,
        thumb_height: f32,
        spacing: f32,
    ) -> Self {
        Self {
            item_count,
            page_width,
            thumb_width,
            thumb_height,
            spacing,
        }
    }

    /// Distance between consecutive thumbnail positions.
    #[inline]
    pub fn thumb_stride(&self) -> f32 {
        (self.thumb_width + self.spacing).max(MIN_STRIDE)
    }

    /// Distance between consecutive primary pages.
    #[inline]
    pub fn page_stride(&self) -> f32 {
        self.page_width.max(MIN_STRIDE)
    }

    #[inline]
    pub fn stride(&self, list: ListId) -> f32 {
        match list {
            ListId::Primary => self.page_stride(),
            ListId::Thumbnails => self.thumb_stride(),
        }
    }

    /// Horizontal padding on each side of the thumbnail strip so that the
    /// thumbnail at the current offset sits in the middle of the page.
    pub fn strip_padding(&self) -> f32 {
        ((self.page_width - self.thumb_width) / 2.0).max(0.0)
    }

    /// Active index for an offset reported by `list`.
    pub fn index_for(&self, list: ListId, offset: f32) -> usize {
        offset_to_index(offset, self.stride(list), self.item_count)
    }

    /// Offset at which item `index` of `list` is aligned.
    pub fn offset_for(&self, list: ListId, index: usize) -> f32 {
        let index = index.min(self.last_index());
        index as f32 * self.stride(list)
    }

    /// Nearest aligned resting offset (page for the primary list, stride
    /// for the strip).
    pub fn snap_offset(&self, list: ListId, offset: f32) -> f32 {
        self.offset_for(list, self.index_for(list, offset))
    }

    /// Map a primary-list offset into thumbnail-strip offset space.
    pub fn primary_to_strip_offset(&self, offset: f32) -> f32 {
        offset * self.thumb_stride() / self.page_stride()
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.item_count.saturating_sub(1)
    }
}

/// `clamp(round(offset / stride), 0, len - 1)`.
///
/// Never fails: negative and non-finite offsets map to 0, offsets past the
/// end map to the last index, and an empty list always yields 0.
pub fn offset_to_index(offset: f32, stride: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let stride = stride.max(MIN_STRIDE);
    // NaN.max(0.0) is 0.0; `as usize` saturates at the top.
    let raw = (offset / stride).round().max(0.0) as usize;
    raw.min(len - 1)
}
