use crate::layout::Document;
use crate::types::*;

/// Statistics about a compiled document
#[derive(Debug, Clone, PartialEq)]
pub struct SliceStatistics {
    /// Number of source images
    pub source_images: usize,
    /// Total number of output pages
    pub output_pages: usize,
    /// Pages produced by each source image, in input order
    pub pages_per_image: Vec<usize>,
    /// Shortest slice in source rows
    pub shortest_page_rows: u32,
    /// Tallest slice in source rows
    pub tallest_page_rows: u32,
    /// Mean fraction of the content height covered by a page
    pub average_fill: f32,
}

/// Calculate statistics for the compiled document
pub fn calculate_statistics(
    document: &Document<'_>,
    source_images: usize,
) -> Result<SliceStatistics> {
    if document.is_empty() {
        return Err(SliceError::InvalidConfig("document has no pages".to_string()));
    }

    let mut pages_per_image = vec![0; source_images];
    let mut shortest_page_rows = u32::MAX;
    let mut tallest_page_rows = 0;
    let mut total_fill = 0.0;

    for page in &document.pages {
        let count = pages_per_image.get_mut(page.image_index).ok_or_else(|| {
            SliceError::input(
                page.slice.image.name(),
                format!(
                    "page refers to image {} of {}",
                    page.image_index, source_images
                ),
            )
        })?;
        *count += 1;

        let rows = page.slice.height();
        shortest_page_rows = shortest_page_rows.min(rows);
        tallest_page_rows = tallest_page_rows.max(rows);
        total_fill += page.fill();
    }

    Ok(SliceStatistics {
        source_images,
        output_pages: document.page_count(),
        pages_per_image,
        shortest_page_rows,
        tallest_page_rows,
        average_fill: total_fill / document.page_count() as f32,
    })
}
