use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{container, image},
};

#[derive(Debug)]
pub struct GalleryTheme;

impl GalleryTheme {
    pub const BACKGROUND: Color = Color::WHITE;
    pub const TEXT: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const ACCENT: Color = Color::from_rgb(0.2, 0.6, 1.0); // #3399FF
    pub const PLACEHOLDER: Color = Color::from_rgb(0.88, 0.88, 0.88);
    pub const PLACEHOLDER_FAILED: Color = Color::from_rgb(0.95, 0.85, 0.85);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT;
        palette.primary = Self::ACCENT;

        Theme::custom("ScrollSync Light", palette)
    }

    /// One-pixel image of `color`, stretched by `ContentFit::Cover` to fill
    /// whatever box it is drawn in.
    pub fn swatch(color: Color) -> image::Handle {
        image::Handle::from_rgba(1, 1, color.into_rgba8().to_vec())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Page,
    Placeholder,
    PlaceholderFailed,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |_| solid(GalleryTheme::BACKGROUND),
            Container::Placeholder => |_| solid(GalleryTheme::PLACEHOLDER),
            Container::PlaceholderFailed => {
                |_| solid(GalleryTheme::PLACEHOLDER_FAILED)
            }
        }
    }
}

fn solid(color: Color) -> container::Style {
    container::Style {
        text_color: Some(GalleryTheme::TEXT),
        background: Some(Background::Color(color)),
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}
