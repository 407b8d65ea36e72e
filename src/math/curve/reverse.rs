use super::ParametricCurve2d;
use crate::math::{Point2d, Vector2d};
use crate::util::Interval;

/// A curve traversed in the opposite direction.
pub struct ReversedCurve<C>
where
    C: ParametricCurve2d,
{
    inner: C,
}

impl<C> ReversedCurve<C>
where
    C: ParametricCurve2d,
{
    pub fn new(curve: C) -> Self {
        Self { inner: curve }
    }

    fn map_t(&self, t: f64) -> f64 {
        let Interval { min, max } = self.inner.bounds();
        max - (t - min)
    }
}

impl<C> ParametricCurve2d for ReversedCurve<C>
where
    C: ParametricCurve2d,
{
    fn sample(&self, t: f64) -> Point2d {
        self.inner.sample(self.map_t(t))
    }

    fn sample_dt(&self, t: f64) -> Vector2d {
        -self.inner.sample_dt(self.map_t(t))
    }

    fn bounds(&self) -> Interval<f64> {
        self.inner.bounds()
    }
}
