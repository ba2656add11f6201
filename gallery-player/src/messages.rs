use std::time::Instant;

use gallery_core::ListId;
use iced::Size;
use iced::widget::{image::Handle, scrollable};

use crate::image_loader::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    First,
    Last,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Gestures
    TouchStart(ListId),
    Scrolled(ListId, scrollable::Viewport),

    // Selection
    ThumbnailPressed(usize),
    Navigate(Navigation),

    // Frame tick while lists are animating or settling
    Tick(Instant),

    WindowResized(Size),

    ImageLoaded(usize, Result<Handle, LoadError>),
}
