use chart_sketch::ChartError;
use chart_sketch::core::Point;
use chart_sketch::render::{Color, DrawItem, NullRenderer};
use chart_sketch::turtle::{Pen, Screen};

#[test]
fn setup_rejects_an_empty_canvas() {
    let err = Screen::setup(NullRenderer::default(), 0, 450, "empty").expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 450 }));
}

#[test]
fn turtle_space_maps_to_pixels_around_the_center() {
    let screen = Screen::setup(NullRenderer::default(), 650, 450, "map").expect("setup");

    assert_eq!(screen.to_pixel(Point::new(0.0, 0.0)), (325.0, 225.0));
    assert_eq!(screen.to_pixel(Point::new(-300.0, 200.0)), (25.0, 25.0));
    assert_eq!(screen.to_pixel(Point::new(300.0, -200.0)), (625.0, 425.0));
}

#[test]
fn tracer_zero_defers_presentation_until_update() {
    let mut screen = Screen::setup(NullRenderer::default(), 200, 100, "deferred").expect("setup");
    screen.tracer(0);
    let mut pen = Pen::new();
    pen.forward(10.0);

    screen.sync(&pen).expect("sync");
    screen.sync(&pen).expect("sync");
    assert_eq!(screen.refresh_count(), 0);

    screen.update(&pen).expect("update");
    assert_eq!(screen.refresh_count(), 1);
    assert_eq!(screen.renderer().last_item_count, 1);
}

#[test]
fn tracer_n_presents_every_nth_sync() {
    let mut screen = Screen::setup(NullRenderer::default(), 200, 100, "every third").expect("setup");
    screen.tracer(3);
    let pen = Pen::new();

    for _ in 0..7 {
        screen.sync(&pen).expect("sync");
    }
    assert_eq!(screen.refresh_count(), 2);
    assert_eq!(screen.tracer_value(), 3);
}

#[test]
fn frame_keeps_shape_order_and_styles() {
    let screen = Screen::setup(NullRenderer::default(), 200, 100, "frame").expect("setup");
    let mut pen = Pen::new();
    pen.set_pen_size(2.0);
    pen.set_fill_color(Color::WHITE);
    pen.begin_fill();
    pen.goto(10.0, 0.0);
    pen.goto(10.0, 10.0);
    pen.end_fill();

    let frame = screen.frame(&pen);

    assert_eq!(frame.background, Color::WHITE);
    assert_eq!(frame.len(), 3);
    match &frame.items[0] {
        DrawItem::Polygon(polygon) => {
            assert_eq!(polygon.points, vec![(100.0, 50.0), (110.0, 50.0), (110.0, 40.0)]);
            assert_eq!(polygon.fill_color, Color::WHITE);
        }
        other => panic!("expected polygon first, got {other:?}"),
    }
    match &frame.items[1] {
        DrawItem::Line(line) => {
            assert_eq!((line.x1, line.y1, line.x2, line.y2), (100.0, 50.0, 110.0, 50.0));
            assert_eq!(line.stroke_width, 2.0);
            assert_eq!(line.color, Color::BLACK);
        }
        other => panic!("expected line, got {other:?}"),
    }
}

#[test]
fn into_renderer_hands_back_the_backend() {
    let mut screen = Screen::setup(NullRenderer::default(), 200, 100, "owned").expect("setup");
    screen.update(&Pen::new()).expect("update");
    let renderer = screen.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
}
