//! Corner-cutting evaluation of a curve from its control points.

use super::{lerp, Point2d};
use itertools::Itertools;
use smallvec::SmallVec;

/// One level of the corner-cutting construction.
pub type Level = SmallVec<[Point2d; 8]>;

/// Lazily produces every level of the corner-cutting construction for a
/// parameter value `t`.
///
/// The first level is the control polygon itself. Each following level holds
/// the interpolation points `p[i] + t * (p[i + 1] - p[i])` between adjacent
/// points of the previous level, so it is one point shorter. The last level
/// contains a single point: the curve evaluated at `t`.
///
/// Levels are derived one after another rather than by recursion, so the
/// stack depth does not depend on the number of control points.
#[derive(Clone, Debug)]
pub struct Subdivision {
    next: Option<Level>,
    t: f64,
}

impl Subdivision {
    /// Starts a construction from the given control points.
    pub fn new(points: impl IntoIterator<Item = Point2d>, t: f64) -> Self {
        let level: Level = points.into_iter().collect();
        Self {
            next: (!level.is_empty()).then_some(level),
            t,
        }
    }

    /// The parameter value the construction is evaluated at.
    pub fn t(&self) -> f64 {
        self.t
    }
}

impl Iterator for Subdivision {
    type Item = Level;

    fn next(&mut self) -> Option<Self::Item> {
        let level = self.next.take()?;
        if level.len() > 1 {
            let t = self.t;
            self.next = Some(
                level
                    .iter()
                    .tuple_windows()
                    .map(|(a, b)| lerp(*a, *b, t))
                    .collect(),
            );
        }
        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.as_ref().map_or(0, |level| level.len());
        (len, Some(len))
    }
}

impl ExactSizeIterator for Subdivision {}

/// Evaluates the curve defined by `points` at `t`.
///
/// Returns `None` when there are no control points.
pub fn evaluate(points: &[Point2d], t: f64) -> Option<Point2d> {
    Subdivision::new(points.iter().copied(), t)
        .last()
        .and_then(|level| level.first().copied())
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn square() -> [Point2d; 4] {
        [
            Point2d::new(0.0, 100.0),
            Point2d::new(0.0, 0.0),
            Point2d::new(100.0, 0.0),
            Point2d::new(100.0, 100.0),
        ]
    }

    #[test]
    pub fn endpoints_match_first_and_last_control_points() {
        let points = square();
        assert_eq!(evaluate(&points, 0.0), Some(Point2d::new(0.0, 100.0)));
        assert_eq!(evaluate(&points, 1.0), Some(Point2d::new(100.0, 100.0)));
    }

    #[test]
    pub fn levels_shrink_by_one() {
        let levels: Vec<_> = Subdivision::new(square(), 0.5).collect();
        let lens: Vec<_> = levels.iter().map(|l| l.len()).collect();
        assert_eq!(lens, vec![4, 3, 2, 1]);
        assert_eq!(levels[0].as_slice(), &square());
        assert_eq!(levels[1][0], Point2d::new(0.0, 50.0));
        assert_eq!(levels[1][1], Point2d::new(50.0, 0.0));
        assert_eq!(levels[1][2], Point2d::new(100.0, 50.0));
        assert_eq!(levels[3][0], Point2d::new(50.0, 25.0));
    }

    #[test]
    pub fn single_point_is_its_own_curve() {
        let p = Point2d::new(3.0, 4.0);
        let levels: Vec<_> = Subdivision::new([p], 0.7).collect();
        assert_eq!(levels.len(), 1);
        assert_eq!(evaluate(&[p], 0.7), Some(p));
    }

    #[test]
    pub fn empty_input_yields_nothing() {
        assert_eq!(Subdivision::new([], 0.5).count(), 0);
        assert_eq!(evaluate(&[], 0.5), None);
    }

    #[test]
    pub fn reversal_symmetry() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"de Casteljau cuts corners nicely");
        for _ in 0..200 {
            let n = rng.gen_range(2..9);
            let points: Vec<_> = (0..n)
                .map(|_| Point2d::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
                .collect();
            let reversed: Vec<_> = points.iter().rev().copied().collect();
            let t = rng.gen_range(0.0..=1.0);
            let a = evaluate(&points, t).unwrap();
            let b = evaluate(&reversed, 1.0 - t).unwrap();
            assert_approx_eq!(a.x, b.x, 1e-9);
            assert_approx_eq!(a.y, b.y, 1e-9);
        }
    }
}
