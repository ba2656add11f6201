//! Resolves an image URI to an iced image handle.
//!
//! Remote URIs are downloaded once with reqwest; local paths are handed to
//! iced as-is and decoded by the renderer.

use std::path::PathBuf;
use std::time::Duration;

use iced::widget::image::Handle;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("request for {uri} failed: {reason}")]
    Request { uri: String, reason: String },
    #[error("server returned {status} for {uri}")]
    Status { uri: String, status: u16 },
    #[error("download of {uri} timed out")]
    Timeout { uri: String },
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),
}

/// Where an image URI points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    pub fn parse(uri: &str) -> Self {
        let lower = uri.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote(uri.trim().to_string())
        } else if let Some(path) = uri.strip_prefix("file://") {
            Self::Local(PathBuf::from(path))
        } else {
            Self::Local(PathBuf::from(uri))
        }
    }
}

/// Image slot as rendered by both lists.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loading,
    Loaded(Handle),
    Failed(LoadError),
}

impl ImageSlot {
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Self::Loaded(handle) => Some(handle),
            _ => None,
        }
    }
}

pub async fn load(
    client: reqwest::Client,
    uri: String,
    timeout: Duration,
) -> Result<Handle, LoadError> {
    match ImageSource::parse(&uri) {
        ImageSource::Local(path) => {
            if path.exists() {
                Ok(Handle::from_path(path))
            } else {
                Err(LoadError::NotFound(path))
            }
        }
        ImageSource::Remote(url) => fetch(client, url, timeout).await,
    }
}

async fn fetch(
    client: reqwest::Client,
    url: String,
    timeout: Duration,
) -> Result<Handle, LoadError> {
    let response = match tokio::time::timeout(timeout, client.get(&url).send())
        .await
    {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            return Err(LoadError::Request {
                uri: url,
                reason: e.to_string(),
            });
        }
        Err(_) => return Err(LoadError::Timeout { uri: url }),
    };

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            uri: url,
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|e| LoadError::Request {
        uri: url.clone(),
        reason: e.to_string(),
    })?;
    log::debug!("Fetched {} bytes from {}", bytes.len(), url);
    Ok(Handle::from_bytes(bytes.to_vec()))
}
