mod line;
mod spline;

pub use line::Line;
pub use spline::SplineCurve;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies in the domain, up to [`TOLERANCE`].
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min - TOLERANCE && t <= self.t_max + TOLERANCE
    }

    /// Returns `t` clamped into the domain, or an error if it lies outside.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `t` is outside the domain
    /// or is NaN.
    pub fn check(&self, parameter: &'static str, t: f64) -> Result<f64> {
        if !self.contains(t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter,
                value: t,
                min: self.t_min,
                max: self.t_max,
            }
            .into());
        }
        Ok(t.clamp(self.t_min, self.t_max))
    }

    /// Returns whether both ends are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite()
    }
}

/// Trait for parametric curves in the plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
