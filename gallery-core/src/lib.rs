//! Gallery core
//!
//! Scroll synchronization between a paged primary image list and a
//! thumbnail strip, independent of any UI toolkit. Hosts implement
//! [`ScrollHandle`] for their list widgets and forward touch, scroll and
//! momentum-end events to a [`SyncController`].

pub mod geometry;
pub mod handle;
pub mod scale;
pub mod sync;

pub use geometry::{CarouselGeometry, offset_to_index};
pub use handle::{ListId, ScrollHandle};
pub use scale::ScaleCurve;
pub use sync::SyncController;
