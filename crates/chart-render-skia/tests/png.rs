// File: crates/chart-render-skia/tests/png.rs
// Purpose: Raster smoke tests: PNG header, RGBA buffer shape, series pixel colour, repeatable output.

use chart_core::{Chart, Dataset, RenderOptions, Rgba};
use chart_render_skia::SkiaRenderer;

fn soc_dataset() -> Dataset {
    Dataset::from_json_slice(
        br#"[
            {"TimeStamp": "2024-01-01T10:00:00Z", "StateOfChargeBMS": 87.4},
            {"TimeStamp": "2024-01-01T10:00:40Z", "StateOfChargeBMS": 87.1},
            {"TimeStamp": "2024-01-01T10:01:20Z"},
            {"TimeStamp": "2024-01-01T10:02:00Z", "StateOfChargeBMS": 86.5},
            {"TimeStamp": "2024-01-01T10:02:40Z", "StateOfChargeBMS": 86.2}
        ]"#,
    )
    .expect("valid dataset")
}

fn soc_chart() -> Chart {
    Chart::single("Battery State of Charge", "TimeStamp", "StateOfChargeBMS", "#10B981", "%").unwrap()
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new();
    let out = std::path::PathBuf::from("target/test_out/soc.png");
    renderer
        .render_to_png(&soc_chart(), &soc_dataset(), &RenderOptions::default(), &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer
        .render_to_png_bytes(&soc_chart(), &soc_dataset(), &RenderOptions::default())
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = SkiaRenderer::new()
        .render_to_rgba8(&soc_chart(), &soc_dataset(), &opts)
        .expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    assert_eq!((w, h), (opts.width as u32, opts.height as u32));

    // White card background in the top-left pixel (RGBA)
    assert_eq!(&px[..4], &[255, 255, 255, 255]);

    // The first point's dot is stroked in the series color.
    let view = soc_chart().view(&soc_dataset(), &opts);
    let p = view.lines[0].points[0].expect("first value present");
    let (x, y) = ((p.x - 3.0).round() as usize, p.y.round() as usize);
    let i = y * stride + x * 4;
    let green = Rgba::from_hex("#10B981").unwrap();
    let close = |a: u8, b: u8| (a as i32 - b as i32).abs() < 40;
    assert!(
        close(px[i], green.r) && close(px[i + 1], green.g) && close(px[i + 2], green.b),
        "pixel {:?} at ({x},{y}) is not series-colored",
        &px[i..i + 4]
    );
}

#[test]
fn empty_dataset_rasterizes() {
    let bytes = SkiaRenderer::new()
        .render_to_png_bytes(&soc_chart(), &Dataset::empty(), &RenderOptions::default())
        .expect("empty charts still render");
    assert!(image::load_from_memory(&bytes).is_ok());
}

#[test]
fn repeated_renders_match_pixel_for_pixel() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.focus = Some(1);
    let renderer = SkiaRenderer::new();
    let decode = |bytes: Vec<u8>| image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    let first = decode(renderer.render_to_png_bytes(&soc_chart(), &soc_dataset(), &opts).expect("first render"));
    let second = decode(renderer.render_to_png_bytes(&soc_chart(), &soc_dataset(), &opts).expect("second render"));
    assert_eq!(first.dimensions(), (640, 360));
    assert!(first.as_raw() == second.as_raw(), "same chart and options rasterized differently");
}
