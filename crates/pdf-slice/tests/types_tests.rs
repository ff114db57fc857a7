use image::RgbImage;
use pdf_slice::*;

#[test]
fn test_margins_default() {
    let margins = Margins::default();
    assert_eq!(margins.top, 72);
    assert_eq!(margins.right, 72);
    assert_eq!(margins.bottom, 72);
    assert_eq!(margins.left, 72);
    assert_eq!(margins.horizontal(), 144);
    assert_eq!(margins.vertical(), 144);
}

#[test]
fn test_page_spec_content_area() {
    let spec = PageSpec {
        width: 944,
        height: 1222,
        margins: Margins {
            top: 10,
            right: 20,
            bottom: 30,
            left: 40,
        },
    };
    assert_eq!(spec.content_width(), 884);
    assert_eq!(spec.content_height(), 1182);
}

#[test]
fn test_raster_image_accessors() {
    let image = RasterImage::new("strip.png", RgbImage::new(320, 4800));
    assert_eq!(image.name(), "strip.png");
    assert_eq!(image.width(), 320);
    assert_eq!(image.height(), 4800);

    // Clones share pixel storage
    let clone = image.clone();
    assert!(std::ptr::eq(image.pixels(), clone.pixels()));
}

#[test]
fn test_error_messages_name_the_path() {
    let err = SliceError::OutputConflict {
        path: "out/book.pdf".into(),
        reason: "path is occupied".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Output conflict at out/book.pdf: path is occupied"
    );

    let err = SliceError::InvalidInput {
        path: "scans/01.png".into(),
        reason: "cannot decode image".to_string(),
    };
    assert!(err.to_string().contains("scans/01.png"));
}

#[test]
fn test_rect_edges() {
    let rect = Rect::new(72.0, 72.0, 800.0, 500.0);
    assert_eq!(rect.right(), 872.0);
    assert_eq!(rect.bottom(), 572.0);
}
