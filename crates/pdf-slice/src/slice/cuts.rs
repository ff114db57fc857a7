//! Adaptive cut planning
//!
//! Walking down the image, each page ends at the lowest-scoring row inside
//! the window `[p + floor(target * tolerance), p + target]`. Ties go to the
//! row nearest `p + target` so pages are filled as far as possible. Once the
//! remaining rows fit on one page the image height closes the plan.

use crate::options::validate_tolerance;
use crate::types::{RasterImage, Result, SliceError};
use std::ops::Range;

/// Cut boundaries for one image: `0 = c0 < c1 < ... < cn = height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutPlan {
    cuts: Vec<u32>,
}

impl CutPlan {
    /// All boundaries, including the leading 0 and the trailing image height
    pub fn cuts(&self) -> &[u32] {
        &self.cuts
    }

    /// Row ranges of each slice, top to bottom
    pub fn slices(&self) -> impl Iterator<Item = Range<u32>> + '_ {
        self.cuts.windows(2).map(|pair| pair[0]..pair[1])
    }

    pub fn page_count(&self) -> usize {
        self.cuts.len().saturating_sub(1)
    }

    /// Height of the image this plan partitions
    pub fn height(&self) -> u32 {
        self.cuts.last().copied().unwrap_or(0)
    }
}

/// Plan the cuts for `image` from its row scores.
///
/// `scores` must hold one entry per image row, as produced by
/// [`score_rows`](super::score_rows).
pub fn plan_cuts(
    image: &RasterImage,
    scores: &[f64],
    target_rows: u32,
    tolerance: f64,
) -> Result<CutPlan> {
    if image.height() == 0 {
        return Err(SliceError::input(image.name(), "image has zero height"));
    }
    if scores.len() != image.height() as usize {
        return Err(SliceError::input(
            image.name(),
            format!(
                "expected {} row scores, got {}",
                image.height(),
                scores.len()
            ),
        ));
    }
    plan_from_scores(scores, target_rows, tolerance)
}

/// Plan cuts over a score array whose length is the image height.
pub fn plan_from_scores(scores: &[f64], target_rows: u32, tolerance: f64) -> Result<CutPlan> {
    validate_tolerance(tolerance)?;
    if target_rows == 0 {
        return Err(SliceError::InvalidConfig(
            "target content height must be positive".to_string(),
        ));
    }
    let height = u32::try_from(scores.len())
        .map_err(|_| SliceError::InvalidConfig("image is too tall".to_string()))?;
    if height == 0 {
        return Err(SliceError::InvalidConfig(
            "cannot plan cuts for an empty image".to_string(),
        ));
    }

    let min_rows = (target_rows as f64 * tolerance).floor() as u32;
    let mut cuts = vec![0];
    let mut position = 0u32;

    while position < height {
        let upper = position.saturating_add(target_rows);
        if upper >= height {
            cuts.push(height);
            break;
        }

        let lower = position
            .saturating_add(min_rows)
            .max(position + 1)
            .min(height);
        let cut = best_cut(scores, lower, upper);
        cuts.push(cut);
        position = cut;
    }

    Ok(CutPlan { cuts })
}

/// Lowest-scoring row in `lower..=upper`, preferring the later row on ties.
fn best_cut(scores: &[f64], lower: u32, upper: u32) -> u32 {
    let mut best = upper;
    let mut best_score = scores[upper as usize];
    for row in (lower..upper).rev() {
        let score = scores[row as usize];
        if score < best_score {
            best = row;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_cut_prefers_minimum() {
        let scores = [5.0, 4.0, 1.0, 3.0, 2.0];
        assert_eq!(best_cut(&scores, 1, 4), 2);
    }

    #[test]
    fn test_best_cut_ties_prefer_fuller_page() {
        let scores = [0.0; 10];
        assert_eq!(best_cut(&scores, 3, 8), 8);

        let scores = [9.0, 1.0, 1.0, 9.0];
        assert_eq!(best_cut(&scores, 0, 3), 2);
    }

    #[test]
    fn test_plan_slices_match_cuts() {
        let plan = plan_from_scores(&[0.0; 25], 10, 0.5).unwrap();
        assert_eq!(plan.cuts(), &[0, 10, 20, 25]);
        let slices: Vec<_> = plan.slices().collect();
        assert_eq!(slices, vec![0..10, 10..20, 20..25]);
        assert_eq!(plan.page_count(), 3);
        assert_eq!(plan.height(), 25);
    }

    #[test]
    fn test_forward_progress_with_tiny_tolerance() {
        // floor(3 * 0.1) == 0 so the lower bound must be lifted to p + 1
        let mut scores = vec![10.0; 9];
        scores[1] = 0.0;
        let plan = plan_from_scores(&scores, 3, 0.1).unwrap();
        assert_eq!(plan.cuts()[1], 1);
        assert!(plan.cuts().windows(2).all(|w| w[0] < w[1]));
    }
}
