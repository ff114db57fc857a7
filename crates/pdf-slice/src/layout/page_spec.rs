//! Page size resolution
//!
//! One `PageSpec` is resolved per run and shared by every image.

use crate::options::SliceOptions;
use crate::types::{PageSpec, Result, SliceError};

/// Resolve the page geometry from the options and the input image sizes.
///
/// Width is the explicit width, or the widest image plus the left and right
/// margins. Height is the explicit height, or `round(width * ratio)`.
///
/// # Arguments
/// * `options` - Slicing options (width, height, ratio, margins)
/// * `dimensions` - (width, height) of every input image
pub fn resolve_page_spec(options: &SliceOptions, dimensions: &[(u32, u32)]) -> Result<PageSpec> {
    let margins = options.margins;
    if margins.overflows() {
        return Err(SliceError::InvalidConfig(format!(
            "margins overflow: {:?}",
            margins
        )));
    }

    let width = match options.width {
        Some(width) => width,
        None => {
            let widest = dimensions
                .iter()
                .map(|&(width, _)| width)
                .max()
                .ok_or_else(|| {
                    SliceError::InvalidConfig(
                        "page width cannot be derived without input images".to_string(),
                    )
                })?;
            widest.saturating_add(margins.horizontal())
        }
    };

    let height = match options.height {
        Some(height) => height,
        None => (width as f64 * options.ratio).round() as u32,
    };

    let spec = PageSpec {
        width,
        height,
        margins,
    };

    if width <= margins.horizontal() || spec.content_width() == 0 {
        return Err(SliceError::InvalidConfig(format!(
            "page width {} leaves no content area after margins {}+{}",
            width, margins.left, margins.right
        )));
    }
    if height <= margins.vertical() || spec.content_height() == 0 {
        return Err(SliceError::InvalidConfig(format!(
            "page height {} leaves no content area after margins {}+{}",
            height, margins.top, margins.bottom
        )));
    }

    log::info!(
        "Page {}x{} px, content area {}x{} px",
        spec.width,
        spec.height,
        spec.content_width(),
        spec.content_height()
    );

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Margins;

    #[test]
    fn test_width_from_widest_image() {
        let options = SliceOptions::default();
        let spec = resolve_page_spec(&options, &[(800, 5000), (600, 3000)]).unwrap();
        assert_eq!(spec.width, 944);
        assert_eq!(spec.height, 1222);
        assert_eq!(spec.content_width(), 800);
        assert_eq!(spec.content_height(), 1078);
    }

    #[test]
    fn test_explicit_height_beats_ratio() {
        let options = SliceOptions {
            height: Some(500),
            ratio: 10.0,
            ..Default::default()
        };
        let spec = resolve_page_spec(&options, &[(100, 100)]).unwrap();
        assert_eq!(spec.width, 244);
        assert_eq!(spec.height, 500);
    }

    #[test]
    fn test_margins_eating_height_rejected() {
        let options = SliceOptions {
            ratio: 0.1,
            margins: Margins::uniform(50),
            ..Default::default()
        };
        // width 200 -> height 20, less than 100 px of vertical margin
        let result = resolve_page_spec(&options, &[(100, 100)]);
        assert!(matches!(result, Err(SliceError::InvalidConfig(_))));
    }
}
