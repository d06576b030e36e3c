/// Enlarged image preview
///
/// Decodes a satellite image and rescales it to a fixed display height,
/// keeping the aspect ratio. Decoding runs on a blocking worker so the
/// UI stays responsive while large PNGs load.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Height of the enlarged image in pixels
pub const PREVIEW_HEIGHT: u32 = 600;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("image not found: {0}")]
    Missing(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("worker join error: {0}")]
    Worker(String),
}

/// Rescaled RGBA pixels ready to hand to the image widget
#[derive(Debug, Clone)]
pub struct ScaledImage {
    /// Source file the pixels were decoded from
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load and rescale an image on a blocking worker
pub async fn load_scaled(path: PathBuf, height: u32) -> Result<ScaledImage, PreviewError> {
    tokio::task::spawn_blocking(move || load_scaled_blocking(&path, height))
        .await
        .map_err(|e| PreviewError::Worker(e.to_string()))?
}

/// Blocking version of preview loading
fn load_scaled_blocking(path: &Path, height: u32) -> Result<ScaledImage, PreviewError> {
    if !path.exists() {
        return Err(PreviewError::Missing(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|source| PreviewError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let width = scaled_width(img.width(), img.height(), height);
    let scaled = img.resize_exact(width, height, FilterType::Lanczos3).to_rgba8();

    info!("🖼️  Scaled {} to {}x{}", path.display(), width, height);
    Ok(ScaledImage {
        path: path.to_path_buf(),
        width,
        height,
        pixels: scaled.into_raw(),
    })
}

/// Outcome of a background preview load, tagged with the requested path
#[derive(Debug, Clone)]
pub struct PreviewResult {
    pub path: PathBuf,
    pub outcome: Result<Handle, String>,
}

/// Load a preview and convert it into an image widget handle
pub async fn load_preview(path: PathBuf) -> PreviewResult {
    let outcome = load_scaled(path.clone(), PREVIEW_HEIGHT)
        .await
        .map(|scaled| {
            debug!("Preview ready for {}", scaled.path.display());
            Handle::from_rgba(scaled.width, scaled.height, scaled.pixels)
        })
        .map_err(|e| e.to_string());
    PreviewResult { path, outcome }
}

/// What the image detail screen currently shows
#[derive(Debug, Clone, Default)]
pub enum PreviewSlot {
    #[default]
    Empty,
    Loading(PathBuf),
    Ready { path: PathBuf, handle: Handle },
    Failed { path: PathBuf, reason: String },
}

impl PreviewSlot {
    pub fn path(&self) -> Option<&Path> {
        match self {
            PreviewSlot::Empty => None,
            PreviewSlot::Loading(path)
            | PreviewSlot::Ready { path, .. }
            | PreviewSlot::Failed { path, .. } => Some(path.as_path()),
        }
    }

    /// Store a finished load unless it belongs to an image that is no
    /// longer being waited for. Returns whether the result was kept.
    pub fn accept(&mut self, result: PreviewResult) -> bool {
        if !matches!(self, PreviewSlot::Loading(p) if *p == result.path) {
            debug!("Discarding stale preview for {}", result.path.display());
            return false;
        }
        *self = match result.outcome {
            Ok(handle) => PreviewSlot::Ready { path: result.path, handle },
            Err(reason) => PreviewSlot::Failed { path: result.path, reason },
        };
        true
    }
}

/// Width that keeps the aspect ratio at the target height (at least 1px)
pub fn scaled_width(width: u32, height: u32, target_height: u32) -> u32 {
    if height == 0 {
        return 1;
    }
    ((width as u64 * target_height as u64) / height as u64).max(1) as u32
}
