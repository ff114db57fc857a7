//! Adaptive page slicing
//!
//! This module drives the per-image part of the pipeline:
//! 1. Score every row for cut safety
//! 2. Search the tolerance window for the least disruptive cut
//! 3. Reassemble per-image plans in input order

mod cuts;
mod io;
mod score;

pub use cuts::{CutPlan, plan_cuts, plan_from_scores};
pub use io::{check_output_path, expand_inputs, load_image, load_images, read_dimensions};
pub use score::score_rows;

use crate::options::SliceOptions;
use crate::types::*;
use tokio::task::JoinSet;

/// Score and slice one image against the page geometry
pub fn plan_image(image: &RasterImage, page: &PageSpec, options: &SliceOptions) -> Result<CutPlan> {
    let scores = score_rows(image, options.locality)?;
    let target_rows = page.target_rows_for(image.width());
    let plan = plan_cuts(image, &scores, target_rows, options.height_tolerance)?;

    log::debug!(
        "{}: {} rows, target {} rows per page, cuts {:?}",
        image.name(),
        image.height(),
        target_rows,
        plan.cuts()
    );

    Ok(plan)
}

/// Plan every image on the blocking pool.
///
/// Images are independent, so they are planned concurrently; the returned
/// plans line up with `images` regardless of which task finishes first.
pub async fn plan_images(
    images: &[RasterImage],
    page: &PageSpec,
    options: &SliceOptions,
) -> Result<Vec<CutPlan>> {
    options.validate()?;

    let mut tasks = JoinSet::new();
    for (index, image) in images.iter().enumerate() {
        let image = image.clone();
        let page = *page;
        let options = options.clone();
        tasks.spawn_blocking(move || {
            plan_image(&image, &page, &options).map(|plan| (index, plan))
        });
    }

    let mut plans: Vec<Option<CutPlan>> = vec![None; images.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, plan) = joined??;
        plans[index] = Some(plan);
    }

    plans
        .into_iter()
        .zip(images)
        .map(|(plan, image)| {
            plan.ok_or_else(|| SliceError::input(image.name(), "image was not planned"))
        })
        .collect()
}
