//! Per-row cut-safety scoring
//!
//! Each row gets an activity value (the luma variance across the row), and
//! the score of a row is the mean activity over a window of `locality` rows
//! centred on it. Windows shrink at the top and bottom edges instead of
//! padding. A low score marks a blank, uniform stretch that is safe to cut.

use crate::types::{RasterImage, Result, SliceError};
use image::Pixel;

/// Score every row of `image` for how disruptive a cut there would be.
///
/// The returned vector has one entry per image row. `locality == 1` scores
/// each row on its own.
pub fn score_rows(image: &RasterImage, locality: usize) -> Result<Vec<f64>> {
    if locality < 1 {
        return Err(SliceError::input(
            image.name(),
            "locality must be at least 1",
        ));
    }
    if image.height() == 0 || image.width() == 0 {
        return Err(SliceError::input(image.name(), "image has no pixels"));
    }

    let activity = row_activity(image);
    Ok(smooth(&activity, locality))
}

/// Luma variance of every row
fn row_activity(image: &RasterImage) -> Vec<f64> {
    let width = image.width() as f64;
    image
        .pixels()
        .rows()
        .map(|row| {
            let (sum, sum_sq) = row.fold((0.0f64, 0.0f64), |(sum, sum_sq), pixel| {
                let luma = pixel.to_luma().0[0] as f64;
                (sum + luma, sum_sq + luma * luma)
            });
            let mean = sum / width;
            (sum_sq / width - mean * mean).max(0.0)
        })
        .collect()
}

/// Windowed mean over `values`, clamped at both ends.
///
/// Uses a prefix-sum pass so each window costs O(1).
fn smooth(values: &[f64], locality: usize) -> Vec<f64> {
    let len = values.len();
    let before = (locality - 1) / 2;
    let after = locality - 1 - before;

    let mut prefix = Vec::with_capacity(len + 1);
    prefix.push(0.0);
    let mut running = 0.0;
    for value in values {
        running += value;
        prefix.push(running);
    }

    (0..len)
        .map(|row| {
            let start = row.saturating_sub(before);
            let end = (row + after + 1).min(len);
            (prefix[end] - prefix[start]) / (end - start) as f64
        })
        .collect()
}
