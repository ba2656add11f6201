use std::sync::Arc;

use iced::{Application, Program as IcedProgram, Settings, Theme};

use crate::config::Config;
use crate::messages::Message;
use crate::state::{self, Gallery};
use crate::{subscriptions, update, view};

/// Build the gallery application from a loaded configuration.
pub fn application(
    config: Config,
) -> Application<impl IcedProgram<State = Gallery, Message = Message, Theme = Theme>>
{
    let window = iced::window::Settings {
        size: iced::Size::new(config.window_width, config.window_height),
        resizable: true,
        decorations: true,
        ..Default::default()
    };
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || state::boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("ScrollSync Gallery")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(window)
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("scrollsync-gallery".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &Gallery) -> Theme {
    crate::theme::GalleryTheme::theme()
}
