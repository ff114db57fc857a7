//! Document compilation
//!
//! Every slice becomes one page. The slice is scaled so its width exactly
//! fills the content width and is anchored at the top-left content corner;
//! its height is kept as planned, so the last page of an image may be short.

use crate::slice::CutPlan;
use crate::types::{PageSpec, RasterImage, Result, SliceError};

use super::{Document, Page, Rect, Slice};

/// Compile planned slices into an ordered document.
///
/// Pages follow `images` order, then top to bottom within each image.
///
/// # Arguments
/// * `images` - Source images, already in name order
/// * `plans` - One cut plan per image, aligned with `images`
/// * `page_spec` - The resolved page geometry
pub fn compile<'a>(
    images: &'a [RasterImage],
    plans: &[CutPlan],
    page_spec: &PageSpec,
) -> Result<Document<'a>> {
    if images.len() != plans.len() {
        return Err(SliceError::InvalidConfig(format!(
            "{} images but {} cut plans",
            images.len(),
            plans.len()
        )));
    }

    let content_rect = content_area(page_spec);
    let mut pages = Vec::new();

    for (image_index, (image, plan)) in images.iter().zip(plans).enumerate() {
        if plan.height() != image.height() {
            return Err(SliceError::input(
                image.name(),
                format!(
                    "cut plan covers {} rows but image has {}",
                    plan.height(),
                    image.height()
                ),
            ));
        }

        let scale = content_rect.width / image.width() as f32;
        for rows in plan.slices() {
            let slice = Slice { image, rows };
            let draw_rect = Rect::new(
                content_rect.x,
                content_rect.y,
                content_rect.width,
                slice.height() as f32 * scale,
            );
            pages.push(Page {
                index: pages.len(),
                image_index,
                slice,
                content_rect,
                draw_rect,
                scale,
            });
        }
    }

    log::info!(
        "Compiled {} pages from {} images",
        pages.len(),
        images.len()
    );

    Ok(Document {
        page_spec: *page_spec,
        pages,
    })
}

/// Content area of a page, top-left origin
pub fn content_area(page_spec: &PageSpec) -> Rect {
    Rect::new(
        page_spec.margins.left as f32,
        page_spec.margins.top as f32,
        page_spec.content_width() as f32,
        page_spec.content_height() as f32,
    )
}
