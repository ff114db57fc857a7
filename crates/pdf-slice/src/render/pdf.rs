//! PDF output using printpdf's op-list API
//!
//! Layout works in pixels from the top-left corner. Pages are emitted at
//! 72 dpi so one pixel is one point; only the y axis needs flipping.

use crate::constants::PIXELS_PER_INCH;
use crate::layout::{Document, Rect};
use crate::types::*;
use image::imageops;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use std::io::Write;
use std::ops::Range;
use std::path::Path;

/// One page's drawing instructions, detached from the document's borrows
/// so it can move onto the blocking pool. Pixels stay shared through the
/// image's `Arc`.
struct PageDraw {
    image: RasterImage,
    rows: Range<u32>,
    draw_rect: Rect,
    scale: f32,
}

/// Render a compiled document to PDF bytes
pub fn render_pdf(document: &Document<'_>, title: &str) -> Result<Vec<u8>> {
    render_pages(&document.page_spec, &page_draws(document), title)
}

/// Render and write the document, refusing to overwrite an existing file.
///
/// Encoding and the write both run on the blocking pool. A failed write
/// removes the file it created, so no partial PDF is left behind.
pub async fn save_pdf(
    document: &Document<'_>,
    path: impl AsRef<Path>,
    title: &str,
) -> Result<()> {
    let path = path.as_ref().to_owned();
    let page_spec = document.page_spec;
    let draws = page_draws(document);
    let title = title.to_string();

    tokio::task::spawn_blocking(move || {
        let bytes = render_pages(&page_spec, &draws, &title)?;

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => SliceError::output(&path, "path is occupied"),
                std::io::ErrorKind::NotFound => {
                    SliceError::output(&path, "directory does not exist")
                }
                _ => SliceError::Io(e),
            })?;
        write_or_remove(file, &path, &bytes)?;

        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok::<_, SliceError>(())
    })
    .await?
}

fn page_draws(document: &Document<'_>) -> Vec<PageDraw> {
    document
        .pages
        .iter()
        .map(|page| PageDraw {
            image: page.slice.image.clone(),
            rows: page.slice.rows.clone(),
            draw_rect: page.draw_rect,
            scale: page.scale,
        })
        .collect()
}

fn render_pages(spec: &PageSpec, draws: &[PageDraw], title: &str) -> Result<Vec<u8>> {
    if draws.is_empty() {
        return Err(SliceError::Pdf("document has no pages".to_string()));
    }

    let page_width = Mm::from(Pt(spec.width as f32));
    let page_height = Mm::from(Pt(spec.height as f32));

    let mut doc = PdfDocument::new(title);
    let mut pages = Vec::with_capacity(draws.len());

    for draw in draws {
        let raw = slice_image(draw)?;
        let xobject_id = doc.add_image(&raw);

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: placement_transform(draw, spec.height as f32),
        }];
        pages.push(PdfPage::new(page_width, page_height, ops));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("printpdf reported {} warnings", warnings.len());
    }

    Ok(bytes)
}

/// Write everything or delete the file at `path`
fn write_or_remove(mut writer: impl Write, path: &Path, bytes: &[u8]) -> Result<()> {
    let written = writer.write_all(bytes).and_then(|()| writer.flush());
    if let Err(e) = written {
        drop(writer);
        if let Err(remove) = std::fs::remove_file(path) {
            log::warn!("Could not remove partial {}: {}", path.display(), remove);
        }
        return Err(SliceError::Io(e));
    }
    Ok(())
}

/// Copy the slice's rows into an RGB8 image for embedding
fn slice_image(draw: &PageDraw) -> Result<RawImage> {
    let height = draw.rows.end.saturating_sub(draw.rows.start);
    let pixels = imageops::crop_imm(
        draw.image.pixels(),
        0,
        draw.rows.start,
        draw.image.width(),
        height,
    )
    .to_image();
    let (width, height) = pixels.dimensions();
    if width == 0 || height == 0 {
        return Err(SliceError::input(
            draw.image.name(),
            format!("slice {:?} is empty", draw.rows),
        ));
    }

    Ok(RawImage {
        pixels: RawImageData::U8(pixels.into_raw()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    })
}

/// Transform placing the slice at its draw rectangle.
///
/// The draw rectangle's top edge is measured from the page top, while PDF
/// translation anchors the image's bottom-left corner from the page bottom.
fn placement_transform(draw: &PageDraw, page_height: f32) -> XObjectTransform {
    let rect = draw.draw_rect;
    XObjectTransform {
        translate_x: Some(Pt(rect.x)),
        translate_y: Some(Pt(page_height - rect.bottom())),
        rotate: None,
        scale_x: Some(draw.scale),
        scale_y: Some(draw.scale),
        dpi: Some(PIXELS_PER_INCH),
    }
}
