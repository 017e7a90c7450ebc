use std::f64::consts::FRAC_PI_2;

pub mod geometry;
pub mod model;
pub mod view;

pub use geometry::{Point, RingParams, Wedge, layout};
pub use model::{ButtonSpec, State};
pub use view::draw;

pub const DEFAULT_OUTER_RADIUS: f64 = 100.0;
pub const DEFAULT_INNER_RADIUS: f64 = 50.0;
pub const DEFAULT_ROTATION: f64 = FRAC_PI_2;
pub const DEFAULT_BUTTON_GAP: f64 = 0.0;
pub const DEFAULT_FONT_FAMILY: &str = "Sans";
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
