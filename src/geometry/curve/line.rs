use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// The vertical line `x = x0`, parameterized by `y`.
    #[must_use]
    pub fn vertical(x0: f64) -> Self {
        Self {
            origin: Point2::new(x0, 0.0),
            direction: Vector2::y(),
        }
    }

    /// The horizontal line `y = y0`, parameterized by `x`.
    #[must_use]
    pub fn horizontal(y0: f64) -> Self {
        Self {
            origin: Point2::new(0.0, y0),
            direction: Vector2::x(),
        }
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Returns the points at the given parameters, in order.
    #[must_use]
    pub fn sample_at(&self, params: &[f64]) -> Vec<Point2> {
        params
            .iter()
            .map(|&t| self.origin + self.direction * t)
            .collect()
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.origin + self.direction * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
