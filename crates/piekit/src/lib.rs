//! Pie chart core: slice geometry, hit-testing and per-slice color gradients.
//!
//! Everything in here is pure and synchronous. The mutable "which slice is under
//! the pointer" state is modelled as a value ([`touch::TouchState`]) that a
//! rendering layer threads through [`touch::TouchState::apply`].

pub mod macros;

pub mod color;
pub mod gradient;
pub mod hit;
pub mod multi_gradient;
pub mod scheme;
pub mod slice;
pub mod touch;

pub use color::{Color, ColorSpec, NamedColor};
pub use gradient::{Gradient, GradientError, GradientGenerator};
pub use hit::{Bounds, Point};
pub use multi_gradient::MultiGradientGenerator;
pub use scheme::ColorScheme;
pub use slice::{DataPoint, Slice, SliceError, SliceName, compute_slices};
pub use touch::{PointerEvent, TouchState, TouchUpdate};
