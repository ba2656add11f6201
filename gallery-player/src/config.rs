use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use gallery_core::scale::REST_SCALE;

const APP_DIR: &str = "scrollsync-gallery";
const CONFIG_FILE: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "GALLERY_CONFIG";
pub const IMAGES_ENV: &str = "GALLERY_IMAGES";

const DEFAULT_IMAGES: [&str; 10] = [
    "https://m.economictimes.com/thumb/height-450,width-600,imgsize-92902,msid-96559100/the-rimac-nevera-is-now-the-fastest-electric-car-in-the-world-image-rimac.jpg",
    "https://www.cadillac.com/content/dam/cadillac/na/us/english/ux/homepage-foundation/new-suvs-dic/24-cadillac-homepage-masthead-lyriq-test-target-l.jpg",
    "https://i.pinimg.com/736x/10/66/46/1066461b5705cbd2a4a074dfa7df12e9.jpg",
    "https://www.mitsubishicars.com/content/dam/mitsubishi-motors-us/images/siteimages/events/2022-year-end-sales/2022-mitsubishi-outlander-phev-white-desert-m.jpg",
    "https://www.autocar.co.uk/sites/autocar.co.uk/files/images/car-reviews/first-drives/legacy/10-porsche-718-cayman-gt4-rs-top-10.jpg",
    "https://hips.hearstapps.com/hmg-prod/images/honda-prelude-concept-front-three-quarters-653927960f1f4.jpg",
    "https://e0.pxfuel.com/wallpapers/1020/193/desktop-wallpaper-black-car-iphone-car-for-iphone.jpg",
    "https://www.bmwusa.com/content/dam/bmw/common/homepage/fmas/2023-01/mobile/BMW-Secondary-FMA-Homepage-Cookied-Tile-01-Mobile.jpg",
    "https://www.bentleymotors.com/content/dam/bentley/Master/homepage%20carousel/1024x512_icon_4.jpg/_jcr_content/renditions/original.image_file.700.350.file/1024x512_icon_4.jpg",
    "https://www.bmwusa.com/content/dam/bmw/common/homepage/fmas/2024-01/mobile/BMW-2023-Offers-January-Primary-FMA-i7-Mobile-V2.jpg",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {0} does not exist")]
    Missing(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
    /// Distance between the strip and the bottom edge of the window.
    pub bottom_offset: f32,
    pub vertical_padding: f32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 60.0,
            spacing: 6.0,
            bottom_offset: 20.0,
            vertical_padding: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Quiet period after the last scroll event before a gesture counts as
    /// settled.
    pub settle_ms: u64,
    pub snap_ms: u64,
    pub select_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            settle_ms: 120,
            snap_ms: 180,
            select_ms: 260,
        }
    }
}

impl MotionConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn snap(&self) -> Duration {
        Duration::from_millis(self.snap_ms)
    }

    pub fn select(&self) -> Duration {
        Duration::from_millis(self.select_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub images: Vec<String>,
    pub thumbnail: ThumbnailConfig,
    pub active_scale: f32,
    pub motion: MotionConfig,
    pub window_width: f32,
    pub window_height: f32,
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
            thumbnail: ThumbnailConfig::default(),
            active_scale: gallery_core::scale::DEFAULT_PEAK_SCALE,
            motion: MotionConfig::default(),
            window_width: 390.0,
            window_height: 844.0,
            fetch_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Defaults, then the config file, then environment overrides.
    ///
    /// An explicit `GALLERY_CONFIG` path must exist; the per-user default
    /// location is optional.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Config = serde_json::from_str(&content).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(IMAGES_ENV) {
            let images: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if images.is_empty() {
                log::warn!("{IMAGES_ENV} is set but lists no images, ignoring");
            } else {
                self.images = images;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thumbnail;
        if !(t.width > 0.0 && t.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "thumbnail size must be positive, got {}x{}",
                t.width, t.height
            )));
        }
        if !(t.spacing >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "thumbnail spacing must not be negative, got {}",
                t.spacing
            )));
        }
        if !(self.active_scale >= REST_SCALE) {
            return Err(ConfigError::Invalid(format!(
                "active_scale must be at least {REST_SCALE}, got {}",
                self.active_scale
            )));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::Invalid(
                "window size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
