use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid input {}: {reason}", path.display())]
    InvalidInput { path: PathBuf, reason: String },
    #[error("Output conflict at {}: {reason}", path.display())]
    OutputConflict { path: PathBuf, reason: String },
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl SliceError {
    pub(crate) fn input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SliceError::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SliceError::OutputConflict {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SliceError>;

/// Page margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_MARGIN)
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin: u32) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    /// Combined left and right margin, saturating at `u32::MAX`
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Combined top and bottom margin, saturating at `u32::MAX`
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Whether either pair of opposite margins sums past `u32::MAX`
    pub fn overflows(&self) -> bool {
        self.left.checked_add(self.right).is_none() || self.top.checked_add(self.bottom).is_none()
    }
}

/// Resolved page geometry shared by every output page.
///
/// All values are in pixels. The content area is the page minus its margins
/// and is guaranteed non-empty once a `PageSpec` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSpec {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
}

impl PageSpec {
    pub fn content_width(&self) -> u32 {
        self.width.saturating_sub(self.margins.horizontal())
    }

    pub fn content_height(&self) -> u32 {
        self.height.saturating_sub(self.margins.vertical())
    }

    /// Page content height measured in rows of a source image of the given
    /// width, once that image is scaled to the content width.
    pub fn target_rows_for(&self, image_width: u32) -> u32 {
        let content_width = self.content_width().max(1) as f64;
        let rows = self.content_height() as f64 * image_width as f64 / content_width;
        (rows.floor() as u32).max(1)
    }
}

/// A decoded source image.
///
/// Pixel data is shared, so cloning a `RasterImage` is cheap and lets the
/// blocking pool read it without copying rows.
#[derive(Debug, Clone)]
pub struct RasterImage {
    name: String,
    pixels: Arc<RgbImage>,
}

impl RasterImage {
    pub fn new(name: impl Into<String>, pixels: RgbImage) -> Self {
        Self {
            name: name.into(),
            pixels: Arc::new(pixels),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}
