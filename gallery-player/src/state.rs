//! Component state, created on boot and dropped with the application.

use std::sync::Arc;

use gallery_core::{CarouselGeometry, ListId, ScaleCurve, SyncController};
use iced::Task;
use iced::widget::image::Handle;

use crate::config::Config;
use crate::image_loader::{self, ImageSlot};
use crate::list_handle::ScrollableHandle;
use crate::messages::Message;
use crate::theme::GalleryTheme;

#[derive(Debug)]
pub struct Gallery {
    pub config: Arc<Config>,
    pub images: Vec<String>,
    pub slots: Vec<ImageSlot>,
    pub sync: SyncController,
    pub primary: ScrollableHandle,
    pub strip: ScrollableHandle,
    loading_swatch: Handle,
    failed_swatch: Handle,
    client: reqwest::Client,
}

impl Gallery {
    pub fn new(config: Arc<Config>) -> Self {
        let images = config.images.clone();
        let geometry = CarouselGeometry::new(
            images.len(),
            config.window_width,
            config.thumbnail.width,
            config.thumbnail.height,
            config.thumbnail.spacing,
        );
        let sync =
            SyncController::new(geometry, ScaleCurve::new(config.active_scale));
        let select = config.motion.select();
        let primary = ScrollableHandle::new(
            geometry.page_stride(),
            images.len(),
            select,
        );
        let strip = ScrollableHandle::new(
            geometry.thumb_stride(),
            images.len(),
            select,
        );

        Self {
            slots: vec![ImageSlot::Loading; images.len()],
            images,
            sync,
            primary,
            strip,
            loading_swatch: GalleryTheme::swatch(GalleryTheme::PLACEHOLDER),
            failed_swatch: GalleryTheme::swatch(GalleryTheme::PLACEHOLDER_FAILED),
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The handle for `list` and the one for the opposite list.
    pub fn handles_mut(
        &mut self,
        list: ListId,
    ) -> (&mut SyncController, &mut ScrollableHandle, &mut ScrollableHandle)
    {
        match list {
            ListId::Primary => (&mut self.sync, &mut self.primary, &mut self.strip),
            ListId::Thumbnails => {
                (&mut self.sync, &mut self.strip, &mut self.primary)
            }
        }
    }

    /// Frame ticks are needed while a list animates or a gesture has not
    /// settled yet.
    pub fn needs_frames(&self) -> bool {
        self.sync.any_owned()
            || self.primary.is_animating()
            || self.strip.is_animating()
    }

    /// Page currently shown by the primary list.
    pub fn current_page(&self) -> usize {
        self.primary.current_index()
    }

    /// Image drawn for a thumbnail: the loaded picture, or a solid swatch
    /// so placeholders scale with the strip like real thumbnails.
    pub fn thumbnail_handle<'a>(&'a self, slot: &'a ImageSlot) -> &'a Handle {
        match slot {
            ImageSlot::Failed(_) => &self.failed_swatch,
            _ => slot.handle().unwrap_or(&self.loading_swatch),
        }
    }

    /// Programmatic scrolls accumulated by the last handler.
    pub fn flush(&mut self) -> Task<Message> {
        Task::batch([self.primary.take_task(), self.strip.take_task()])
    }

    fn load_images(&self) -> Task<Message> {
        let timeout = self.config.fetch_timeout();
        Task::batch(self.images.iter().cloned().enumerate().map(|(i, uri)| {
            let client = self.client.clone();
            Task::perform(image_loader::load(client, uri, timeout), move |r| {
                Message::ImageLoaded(i, r)
            })
        }))
    }
}

/// Mount: build state and start fetching every image.
pub fn boot(config: &Arc<Config>) -> (Gallery, Task<Message>) {
    let gallery = Gallery::new(Arc::clone(config));
    log::info!("Mounting gallery with {} images", gallery.len());
    let task = gallery.load_images();
    (gallery, task)
}
