//! Host abstraction over an imperatively scrollable list.

use std::fmt;

/// Identifies one of the two synchronized lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListId {
    /// Full-page image list, paging scroll.
    Primary,
    /// Thumbnail strip, snap-to-interval scroll.
    Thumbnails,
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Thumbnails => f.write_str("thumbnails"),
        }
    }
}

/// Minimal imperative surface a host list widget has to expose.
///
/// Implementations must not feed the programmatic scroll back into the
/// controller as a gesture: the host reports the resulting scroll events
/// like any other, and the controller's ownership flags filter them.
pub trait ScrollHandle {
    /// Move the list so that item `index` is aligned. `animated` requests a
    /// short tween instead of a jump.
    fn scroll_to_index(&mut self, index: usize, animated: bool);

    /// Current horizontal offset in pixels.
    fn current_offset(&self) -> f32;
}

impl<H: ScrollHandle + ?Sized> ScrollHandle for &mut H {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        (**self).scroll_to_index(index, animated);
    }

    fn current_offset(&self) -> f32 {
        (**self).current_offset()
    }
}
