use tracing::info;

use crate::config::FlagConfig;
use crate::error::ChartResult;
use crate::render::{Color, Renderer};
use crate::turtle::shapes::{
    draw_dot, draw_ellipse, draw_rect_center, draw_spear, draw_traced_strip,
};
use crate::turtle::{Pen, Screen};

pub const FLAG_WIDTH: f64 = 600.0;
pub const FLAG_HEIGHT: f64 = 400.0;
pub const STRIPE_HEIGHT: f64 = FLAG_HEIGHT / 3.0;
pub const FIMBRIATION: f64 = 6.0;
pub const SHIELD_A: f64 = 60.0;
pub const SHIELD_B: f64 = 110.0;
pub const DOT_RADIUS: f64 = 6.0;

pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);
pub const RED: Color = Color::from_rgb8(0xFF, 0x00, 0x00);
pub const GREEN: Color = Color::from_rgb8(0x00, 0x66, 0x00);
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
pub const SPEAR: Color = Color::from_rgb8(0x44, 0x44, 0x44);
pub const SHIELD_RED: Color = Color::from_rgb8(0xC8, 0x10, 0x2E);

pub const SCREEN_TITLE: &str = "Kenyan Flag - Turtle";

/// Draws the flag centered on the origin. Each step is followed by a
/// `sync`, so a screen with an active tracer shows the drawing build up.
pub fn draw_kenyan_flag<R: Renderer>(pen: &mut Pen, screen: &mut Screen<R>) -> ChartResult<()> {
    let (cx, cy) = (0.0, 0.0);

    draw_rect_center(pen, cx, cy + STRIPE_HEIGHT, FLAG_WIDTH, STRIPE_HEIGHT, BLACK);
    screen.sync(pen)?;
    draw_upper_fimbriation(pen);
    screen.sync(pen)?;
    draw_rect_center(pen, cx, cy, FLAG_WIDTH, STRIPE_HEIGHT, RED);
    screen.sync(pen)?;
    draw_lower_fimbriation(pen);
    screen.sync(pen)?;
    draw_rect_center(pen, cx, cy - STRIPE_HEIGHT, FLAG_WIDTH, STRIPE_HEIGHT, GREEN);
    screen.sync(pen)?;

    // Spears go beneath the shield.
    draw_spear(pen, cx - 160.0, cy + 120.0, cx + 40.0, cy - 140.0, SPEAR);
    screen.sync(pen)?;
    draw_spear(pen, cx + 160.0, cy + 120.0, cx - 40.0, cy - 140.0, SPEAR);
    screen.sync(pen)?;

    for (grow, color) in [(18.0, WHITE), (10.0, SHIELD_RED), (4.0, WHITE), (-6.0, BLACK)] {
        draw_ellipse(pen, cx, cy, SHIELD_A + grow, SHIELD_B + grow, color, 1.0);
        screen.sync(pen)?;
    }

    draw_traced_strip(
        pen,
        cx - 8.0,
        cy + SHIELD_B - 20.0,
        (SHIELD_B - 20.0) * 2.0,
        16.0,
        WHITE,
    );
    screen.sync(pen)?;

    draw_dot(pen, cx - 30.0, cy + 20.0, DOT_RADIUS, WHITE);
    screen.sync(pen)?;
    draw_dot(pen, cx + 30.0, cy - 20.0, DOT_RADIUS, WHITE);
    screen.sync(pen)?;

    draw_traced_strip(
        pen,
        cx - 4.0,
        cy + SHIELD_B - 12.0,
        (SHIELD_B - 12.0) * 2.0,
        8.0,
        BLACK,
    );
    screen.sync(pen)?;

    // Fimbriations again so the stripe edges stay crisp.
    draw_upper_fimbriation(pen);
    screen.sync(pen)?;
    draw_lower_fimbriation(pen);
    screen.sync(pen)?;
    Ok(())
}

/// Sets up a screen sized for the flag plus margin, draws without
/// intermediate refreshes and presents once. Returns the screen and the pen
/// so callers can export the final frame.
pub fn render_kenyan_flag<R: Renderer>(
    renderer: R,
    config: &FlagConfig,
) -> ChartResult<(Screen<R>, Pen)> {
    let (width, height) = config.canvas_size()?;
    let mut screen = Screen::setup(renderer, width, height, config.title.clone())?;
    screen.tracer(0);

    let mut pen = Pen::new();
    pen.set_pen_size(1.0);
    draw_kenyan_flag(&mut pen, &mut screen)?;
    screen.update(&pen)?;
    info!(shapes = pen.shapes().len(), "kenyan flag drawn");
    Ok((screen, pen))
}

fn draw_upper_fimbriation(pen: &mut Pen) {
    draw_rect_center(pen, 0.0, FIMBRIATION / 2.0, FLAG_WIDTH, FIMBRIATION, WHITE);
}

fn draw_lower_fimbriation(pen: &mut Pen) {
    draw_rect_center(
        pen,
        0.0,
        -STRIPE_HEIGHT + FIMBRIATION / 2.0,
        FLAG_WIDTH,
        FIMBRIATION,
        WHITE,
    );
}
