use image::{Rgb, RgbImage};
use pdf_slice::*;

fn create_test_image(name: &str, width: u32, height: u32) -> RasterImage {
    RasterImage::new(name, RgbImage::from_pixel(width, height, Rgb([255, 255, 255])))
}

fn default_page_for(images: &[RasterImage]) -> PageSpec {
    let dimensions: Vec<(u32, u32)> = images.iter().map(|i| (i.width(), i.height())).collect();
    resolve_page_spec(&SliceOptions::default(), &dimensions).unwrap()
}

#[test]
fn test_resolve_width_from_widest_input() {
    let options = SliceOptions::default();
    let spec = resolve_page_spec(&options, &[(800, 4000), (600, 9000)]).unwrap();
    assert_eq!(spec.width, 800 + 72 + 72);
    assert_eq!(spec.width, 944);
}

#[test]
fn test_resolve_height_from_ratio() {
    let options = SliceOptions {
        width: Some(944),
        ..Default::default()
    };
    let spec = resolve_page_spec(&options, &[(10, 10)]).unwrap();
    // round(944 * 1.294) = round(1221.536)
    assert_eq!(spec.height, 1222);
}

#[test]
fn test_resolve_explicit_dimensions() {
    let options = SliceOptions {
        width: Some(600),
        height: Some(900),
        margins: Margins {
            top: 10,
            right: 20,
            bottom: 30,
            left: 40,
        },
        ..Default::default()
    };
    let spec = resolve_page_spec(&options, &[(5000, 5000)]).unwrap();
    assert_eq!((spec.width, spec.height), (600, 900));
    assert_eq!(spec.content_width(), 540);
    assert_eq!(spec.content_height(), 860);
}

#[test]
fn test_resolve_without_inputs_fails() {
    let result = resolve_page_spec(&SliceOptions::default(), &[]);
    assert!(matches!(result, Err(SliceError::InvalidConfig(_))));
}

#[test]
fn test_resolve_margins_wider_than_page() {
    let options = SliceOptions {
        width: Some(100),
        margins: Margins::uniform(50),
        ..Default::default()
    };
    let result = resolve_page_spec(&options, &[(10, 10)]);
    assert!(matches!(result, Err(SliceError::InvalidConfig(_))));
}

#[test]
fn test_target_rows_scale_with_image_width() {
    let spec = PageSpec {
        width: 944,
        height: 1222,
        margins: Margins::default(),
    };
    assert_eq!(spec.target_rows_for(800), 1078);
    assert_eq!(spec.target_rows_for(400), 539);
    assert_eq!(spec.target_rows_for(1600), 2156);
}

#[test]
fn test_compile_pages_in_image_then_slice_order() {
    let images = vec![
        create_test_image("a.png", 800, 2500),
        create_test_image("b.png", 800, 1000),
    ];
    let page = default_page_for(&images);
    let options = SliceOptions::default();

    let plans: Vec<CutPlan> = images
        .iter()
        .map(|image| plan_image(image, &page, &options).unwrap())
        .collect();
    let document = compile(&images, &plans, &page).unwrap();

    // Blank 2500-row image: 1078 + 1078 + 344; second image fits on one page
    assert_eq!(document.page_count(), 4);
    let sources: Vec<(usize, std::ops::Range<u32>)> = document
        .pages
        .iter()
        .map(|p| (p.image_index, p.slice.rows.clone()))
        .collect();
    assert_eq!(
        sources,
        vec![(0, 0..1078), (0, 1078..2156), (0, 2156..2500), (1, 0..1000)]
    );

    for (i, page) in document.pages.iter().enumerate() {
        assert_eq!(page.index, i);
        assert_eq!(page.scale, 1.0);
        assert_eq!(page.content_rect, Rect::new(72.0, 72.0, 800.0, 1078.0));
        assert_eq!(page.draw_rect.x, 72.0);
        assert_eq!(page.draw_rect.y, 72.0);
        assert_eq!(page.draw_rect.width, 800.0);
        assert_eq!(page.draw_rect.height, page.slice.height() as f32);
    }

    // The last slice of an image keeps its own height
    assert_eq!(document.pages[2].draw_rect.height, 344.0);
    assert_eq!(document.pages[2].slice.image.name(), "a.png");
}

#[test]
fn test_compile_scales_narrow_image_to_content_width() {
    let images = vec![
        create_test_image("wide.png", 800, 100),
        create_test_image("narrow.png", 400, 1200),
    ];
    let page = default_page_for(&images);
    let options = SliceOptions::default();
    let plans: Vec<CutPlan> = images
        .iter()
        .map(|image| plan_image(image, &page, &options).unwrap())
        .collect();

    assert_eq!(plans[1].cuts(), &[0, 539, 1078, 1200]);

    let document = compile(&images, &plans, &page).unwrap();
    let narrow_pages: Vec<&Page> = document
        .pages
        .iter()
        .filter(|p| p.image_index == 1)
        .collect();
    assert_eq!(narrow_pages.len(), 3);
    for page in narrow_pages {
        assert_eq!(page.scale, 2.0);
        assert_eq!(page.draw_rect.width, 800.0);
        assert!(page.draw_rect.height <= page.content_rect.height);
    }
}

#[test]
fn test_compile_rejects_mismatched_plans() {
    let images = vec![create_test_image("a.png", 100, 100)];
    let page = default_page_for(&images);
    let result = compile(&images, &[], &page);
    assert!(matches!(result, Err(SliceError::InvalidConfig(_))));
}

#[test]
fn test_compile_rejects_plan_for_other_image() {
    let images = vec![
        create_test_image("a.png", 100, 100),
        create_test_image("b.png", 100, 300),
    ];
    let page = default_page_for(&images);
    let options = SliceOptions::default();
    let plan_a = plan_image(&images[0], &page, &options).unwrap();

    let result = compile(&images, &[plan_a.clone(), plan_a], &page);
    assert!(matches!(result, Err(SliceError::InvalidInput { .. })));
}

#[test]
fn test_slice_view_covers_rows() {
    let mut pixels = RgbImage::from_pixel(4, 10, Rgb([255, 255, 255]));
    pixels.put_pixel(0, 6, Rgb([1, 2, 3]));
    let image = RasterImage::new("view.png", pixels);
    let slice = Slice {
        image: &image,
        rows: 5..8,
    };

    let view = slice.view().to_image();
    assert_eq!(view.dimensions(), (4, 3));
    assert_eq!(view.get_pixel(0, 1), &Rgb([1, 2, 3]));
}
