//! ScrollSync gallery player
//!
//! Desktop rendition of the synchronized image carousel: a full-window
//! paged image list with a thumbnail strip overlaid at the bottom. The
//! synchronization itself lives in `gallery-core`; this crate binds it to
//! iced scrollables, synthesizes touch-start and momentum-end events, and
//! loads the images.
//!
//! The library is exposed mainly so the update loop can be driven from
//! integration tests without a window.

pub mod animator;
pub mod app;
pub mod config;
pub mod image_loader;
pub mod list_handle;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
