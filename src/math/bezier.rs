use cgmath::prelude::*;
use crate::util::Interval;
use super::{evaluate, Level, Point2d, Vector2d};
use super::curve::ParametricCurve2d;

/// A Bézier curve of arbitrary degree, evaluated by corner cutting.
#[derive(Clone, Debug)]
pub struct BezierCurve2d {
    points: Level,
}

impl BezierCurve2d {
    /// Creates a curve from its control points.
    pub fn new(points: impl IntoIterator<Item = Point2d>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// The control points, in order.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// The degree of the curve, one less than the number of control points.
    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the control points of the derivative curve, scaled so that
    /// evaluating them at `t` gives the derivative of this curve at `t`.
    fn hodograph(&self) -> impl Iterator<Item = Vector2d> + '_ {
        let n = self.degree() as f64;
        self.points.windows(2).map(move |w| (w[1] - w[0]) * n)
    }
}

impl ParametricCurve2d for BezierCurve2d {
    fn sample(&self, t: f64) -> Point2d {
        evaluate(&self.points, t).unwrap_or_else(Point2d::origin)
    }

    fn bounds(&self) -> Interval<f64> {
        Interval { min: 0.0, max: 1.0 }
    }

    fn sample_dt(&self, t: f64) -> Vector2d {
        let hodograph: Level = self.hodograph().map(Point2d::from_vec).collect();
        evaluate(&hodograph, t)
            .map(|p| p.to_vec())
            .unwrap_or_else(|| Vector2d::new(0.0, 0.0))
    }
}
