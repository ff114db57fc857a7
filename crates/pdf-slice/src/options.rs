use crate::constants::{DEFAULT_HEIGHT_TOLERANCE, DEFAULT_LOCALITY, DEFAULT_RATIO};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slicing configuration
///
/// Page width and height are in pixels and include the margins. When
/// `width` is omitted the widest input plus the horizontal margins is used;
/// when `height` is omitted it is derived from the width and `ratio`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliceOptions {
    // Page geometry
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub ratio: f64,
    pub margins: Margins,

    // Cut search
    pub height_tolerance: f64,
    pub locality: usize,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            ratio: DEFAULT_RATIO,
            margins: Margins::default(),
            height_tolerance: DEFAULT_HEIGHT_TOLERANCE,
            locality: DEFAULT_LOCALITY,
        }
    }
}

impl SliceOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SliceError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            SliceError::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.width == Some(0) {
            return Err(SliceError::InvalidConfig("width must be positive".to_string()));
        }

        if self.height == Some(0) {
            return Err(SliceError::InvalidConfig("height must be positive".to_string()));
        }

        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(SliceError::InvalidConfig(format!(
                "ratio must be a positive number, got {}",
                self.ratio
            )));
        }

        validate_tolerance(self.height_tolerance)?;

        if self.locality < 1 {
            return Err(SliceError::InvalidConfig("locality must be at least 1".to_string()));
        }

        if self.margins.overflows() {
            return Err(SliceError::InvalidConfig(format!(
                "margins overflow: {:?}",
                self.margins
            )));
        }

        // Explicit dimensions can be checked against the margins up front
        if let Some(width) = self.width {
            if width <= self.margins.horizontal() {
                return Err(SliceError::InvalidConfig(format!(
                    "width {} leaves no content area after left/right margins of {}",
                    width,
                    self.margins.horizontal()
                )));
            }
        }
        if let Some(height) = self.height {
            if height <= self.margins.vertical() {
                return Err(SliceError::InvalidConfig(format!(
                    "height {} leaves no content area after top/bottom margins of {}",
                    height,
                    self.margins.vertical()
                )));
            }
        }

        Ok(())
    }
}

/// The tolerance must lie in (0, 1]
pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    if !(tolerance > 0.0 && tolerance <= 1.0) {
        return Err(SliceError::InvalidConfig(format!(
            "height tolerance must be in (0, 1], got {}",
            tolerance
        )));
    }
    Ok(())
}
