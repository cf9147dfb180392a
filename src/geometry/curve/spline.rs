use crate::error::{GeometryError, Result};
use crate::math::Point2;
use crate::tessellation::{Polyline, TessellationParams};

use super::{Curve, CurveDomain};

/// A uniform Catmull-Rom spline through an ordered list of points.
///
/// The parameter `u` runs over `[0, 1]`. With `n` points, control point `k`
/// is reached at `u = k / (n - 1)`, so the first and last points are the
/// curve's endpoints. At the ends the missing neighbour is the end point
/// itself.
#[derive(Debug, Clone)]
pub struct SplineCurve {
    points: Vec<Point2>,
}

impl SplineCurve {
    /// Creates a spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `points` is empty.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(
                GeometryError::Degenerate("spline needs at least one point".to_owned()).into(),
            );
        }
        Ok(Self { points })
    }

    /// Creates a spline from points already known to be non-empty.
    pub(crate) fn from_nonempty(points: Vec<Point2>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the spline, returning its control points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Samples the spline at `divisions + 1` evenly spaced parameters,
    /// both endpoints included.
    #[must_use]
    pub fn tessellate(&self, params: TessellationParams) -> Polyline {
        let divisions = params.divisions();
        let points = (0..=divisions)
            .map(|j| self.point_at(f64::from(j) / f64::from(divisions)))
            .collect();
        Polyline { points }
    }

    /// Evaluates at `u`, which the caller guarantees lies in `[0, 1]`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn point_at(&self, u: f64) -> Point2 {
        let n = self.points.len();
        let last = n - 1;
        if last == 0 {
            return self.points[0];
        }

        let p = last as f64 * u;
        let i = (p.floor() as usize).min(last);
        let w = p - i as f64;

        let p0 = self.points[i.saturating_sub(1)];
        let p1 = self.points[i];
        let p2 = self.points[(i + 1).min(last)];
        let p3 = self.points[(i + 2).min(last)];

        catmull_rom(w, &p0, &p1, &p2, &p3)
    }
}

impl Curve for SplineCurve {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let u = self.domain().check("u", t)?;
        Ok(self.point_at(u))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

/// Cubic Hermite form of one Catmull-Rom segment from `p1` (w = 0) to `p2` (w = 1).
fn catmull_rom(w: f64, p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> Point2 {
    let v0 = (p2 - p0) * 0.5;
    let v1 = (p3 - p1) * 0.5;
    let w2 = w * w;
    let w3 = w2 * w;

    p1 + ((p1 - p2) * 2.0 + v0 + v1) * w3 + ((p2 - p1) * 3.0 - v0 * 2.0 - v1) * w2 + v0 * w
}
