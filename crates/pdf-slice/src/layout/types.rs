//! Layout data types for pagination
//!
//! These types sit between cut planning and PDF rendering. Coordinates are
//! in pixels with the origin at the top-left corner of the page.

use crate::types::{PageSpec, RasterImage};
use image::{RgbImage, SubImage, imageops};
use std::ops::Range;

/// A rectangular area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge, measured down from the top of the page)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A contiguous run of rows in one source image.
///
/// Borrows the image rather than copying its pixels.
#[derive(Debug, Clone)]
pub struct Slice<'a> {
    pub image: &'a RasterImage,
    pub rows: Range<u32>,
}

impl<'a> Slice<'a> {
    pub fn height(&self) -> u32 {
        self.rows.end - self.rows.start
    }

    /// View of the slice's pixels
    pub fn view(&self) -> SubImage<&'a RgbImage> {
        imageops::crop_imm(
            self.image.pixels(),
            0,
            self.rows.start,
            self.image.width(),
            self.height(),
        )
    }
}

/// Placement of one slice on an output page
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Zero-based index in the document
    pub index: usize,
    /// Index of the source image in input order
    pub image_index: usize,
    pub slice: Slice<'a>,
    /// Page area inside the margins
    pub content_rect: Rect,
    /// Where the slice is drawn; shares the content origin and width
    pub draw_rect: Rect,
    /// Factor from source pixels to page pixels
    pub scale: f32,
}

impl Page<'_> {
    /// Fraction of the content height covered by the slice
    pub fn fill(&self) -> f32 {
        if self.content_rect.height > 0.0 {
            self.draw_rect.height / self.content_rect.height
        } else {
            0.0
        }
    }
}

/// The paginated result, ready for a writer
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub page_spec: PageSpec,
    pub pages: Vec<Page<'a>>,
}

impl Document<'_> {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
