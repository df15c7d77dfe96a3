use piekit::color::Color;
use piekit::hit::Point;
use piekit::slice::DataPoint;

#[derive(Debug, Clone)]
pub enum AppEvent {
    PointerMove(Point),
    PointerUp,
    Resize { width: f64, height: f64 },
    DataChanged(Vec<DataPoint>),
    ColorsChanged(Vec<Color>),
}
