//! Pen-based vector drawing and the Kenyan flag layout built on it.

pub mod kenya;
pub mod pen;
pub mod screen;
pub mod shapes;

pub use kenya::{SCREEN_TITLE, draw_kenyan_flag, render_kenyan_flag};
pub use pen::{Pen, Shape};
pub use screen::{CANVAS_MARGIN, Screen};
pub use shapes::{draw_ellipse, draw_rect_center, draw_spear};
