//! Mathematical structs and functions.

use cgmath::{Point2, Vector2};
pub use util::*;
pub use curve::{subdivided_points_along_curve, ParametricCurve2d, ReversedCurve};
pub use bezier::BezierCurve2d;
pub use subdivision::{evaluate, Level, Subdivision};

mod util;
mod curve;
mod bezier;
mod subdivision;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;
