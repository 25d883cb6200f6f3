#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_sketch::ChartError;
use chart_sketch::FlagConfig;
use chart_sketch::chart::{BarLineChartOptions, build_bar_line_figure};
use chart_sketch::data::{CropFilter, Record, WideTable};
use chart_sketch::render::{
    CairoContextRenderer, CairoRenderer, OutputFormat, Renderer, paint_frame, write_frame,
};
use chart_sketch::turtle::render_kenyan_flag;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_paints_every_flag_polygon() {
    let (screen, pen) =
        render_kenyan_flag(CairoRenderer::new(650, 450).expect("renderer"), &FlagConfig::default())
            .expect("draw flag");
    let stats = screen.renderer().last_stats();

    assert_eq!(stats.polygons_drawn, 17);
    assert_eq!(stats.lines_drawn, screen.frame(&pen).lines().count());
    assert_eq!(stats.texts_drawn, 0);
}

#[test]
fn cairo_renderer_draws_chart_text_and_bars() {
    let records = vec![
        Record::new(2019, "Ghana", "Cocoa, beans", "Production", Some(812_000.0)),
        Record::new(2020, "Ghana", "Cocoa, beans", "Production", Some(800_000.0)),
    ];
    let subset = CropFilter::default().apply(&WideTable::pivot(&records));
    let figure =
        build_bar_line_figure(&subset, &BarLineChartOptions::default()).expect("bar figure");

    let mut renderer = CairoRenderer::for_frame(&figure.frame).expect("renderer");
    renderer.render(&figure.frame).expect("render");
    let stats = renderer.last_stats();

    assert_eq!(stats.texts_drawn, figure.frame.texts().count());
    assert_eq!(stats.rects_drawn, figure.frame.rects().count());
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let (screen, pen) =
        render_kenyan_flag(chart_sketch::render::NullRenderer::default(), &FlagConfig::default())
            .expect("draw flag");
    let frame = screen.frame(&pen);

    let surface = ImageSurface::create(Format::ARgb32, 650, 450).expect("surface");
    let context = Context::new(&surface).expect("context");
    let stats = paint_frame(&context, &frame).expect("paint");
    assert_eq!(stats.polygons_drawn, 17);

    let mut renderer = CairoRenderer::new(650, 450).expect("renderer");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");
    assert_eq!(renderer.last_stats(), stats);
}

#[test]
fn png_export_writes_a_file() {
    let (screen, pen) =
        render_kenyan_flag(chart_sketch::render::NullRenderer::default(), &FlagConfig::default())
            .expect("draw flag");
    let path = std::env::temp_dir().join(format!("chart-sketch-flag-{}.png", std::process::id()));

    write_frame(&screen.frame(&pen), &path, OutputFormat::Png).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    std::fs::remove_file(&path).expect("remove png");

    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
