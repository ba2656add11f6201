//! PrimaryList page row with the ThumbnailStrip overlaid at the bottom.

use gallery_core::ListId;
use iced::{
    Alignment, ContentFit, Element, Length, Padding,
    widget::{Space, column, container, image, mouse_area, row, scrollable, stack},
};

use crate::image_loader::ImageSlot;
use crate::messages::Message;
use crate::state::Gallery;
use crate::theme::Container;

pub fn view(state: &Gallery) -> Element<'_, Message> {
    let overlay = column![
        Space::new().height(Length::Fill),
        container(thumbnail_strip(state)).padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: state.config.thumbnail.bottom_offset,
            left: 0.0,
        }),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    container(stack![primary_list(state), overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(Container::Page.style())
        .into()
}

/// Scrollbars stay hidden on both lists.
fn hidden_horizontal() -> scrollable::Direction {
    scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new().width(0).scroller_width(0),
    )
}

fn primary_list(state: &Gallery) -> Element<'_, Message> {
    let page_width = state.sync.geometry().page_width;
    let pages = state.slots.iter().map(|slot| page(slot, page_width));

    let list = scrollable(row(pages))
        .id(state.primary.id().clone())
        .direction(hidden_horizontal())
        .on_scroll(|viewport| Message::Scrolled(ListId::Primary, viewport))
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(list)
        .on_press(Message::TouchStart(ListId::Primary))
        .into()
}

fn page(slot: &ImageSlot, width: f32) -> Element<'_, Message> {
    match slot {
        ImageSlot::Loaded(handle) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        ImageSlot::Loading => placeholder(Length::Fixed(width), Length::Fill, false),
        ImageSlot::Failed(_) => placeholder(Length::Fixed(width), Length::Fill, true),
    }
}

fn thumbnail_strip(state: &Gallery) -> Element<'_, Message> {
    let geometry = state.sync.geometry();
    let thumbs = state
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| thumbnail(state, index, slot));

    // Room for the enlarged thumbnail above and below.
    let v_pad = state.config.thumbnail.vertical_padding;
    let grown = geometry.thumb_height * (state.sync.curve().peak() - 1.0);
    let strip_height = geometry.thumb_height + grown + 2.0 * v_pad;

    let content = row(thumbs)
        .spacing(geometry.spacing)
        .align_y(Alignment::Center)
        .padding(Padding {
            top: v_pad,
            right: geometry.strip_padding(),
            bottom: v_pad,
            left: geometry.strip_padding(),
        });

    let list = scrollable(content)
        .id(state.strip.id().clone())
        .direction(hidden_horizontal())
        .on_scroll(|viewport| Message::Scrolled(ListId::Thumbnails, viewport))
        .width(Length::Fill)
        .height(Length::Fixed(strip_height));

    mouse_area(list)
        .on_press(Message::TouchStart(ListId::Thumbnails))
        .into()
}

fn thumbnail<'a>(
    state: &'a Gallery,
    index: usize,
    slot: &'a ImageSlot,
) -> Element<'a, Message> {
    let geometry = state.sync.geometry();
    let width = Length::Fixed(geometry.thumb_width);
    let height = Length::Fixed(geometry.thumb_height);
    let scale = state.sync.thumbnail_scale(index);

    let content = image(state.thumbnail_handle(slot).clone())
        .width(width)
        .height(height)
        .content_fit(ContentFit::Cover)
        .scale(scale);

    mouse_area(content)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

fn placeholder<'a>(width: Length, height: Length, failed: bool) -> Element<'a, Message> {
    let style = if failed {
        Container::PlaceholderFailed
    } else {
        Container::Placeholder
    };
    container(Space::new().width(width).height(height))
        .width(width)
        .height(height)
        .style(style.style())
        .into()
}
