pub mod model;
#[cfg(feature = "render")]
pub mod view;

pub use model::{ChartAction, ChartState, LegendEntry};
#[cfg(feature = "render")]
pub use view::{draw, render_png};

pub const DEFAULT_SIZE: f64 = 256.0;
pub const HIGHLIGHT_SCALE: f64 = 1.1;
pub const LABEL_RADIUS_FACTOR: f64 = 0.75; // label distance from center, relative to radius
pub const BOUNDARY_STROKE_WIDTH: f64 = 2.0;
pub const LEGEND_SWATCH_SIZE: f64 = 10.0;
pub const LEGEND_ROW_HEIGHT: f64 = 18.0;
pub const LEGEND_MARGIN: f64 = 16.0;
pub const LEGEND_WIDTH: f64 = 140.0;
