mod squaring;

pub use squaring::Squaring;

use crate::math::Point2;

/// A deterministic, side-effect-free transformation of the plane.
///
/// Mappers are only consulted when an animation is constructed: the image
/// of every sample point is computed once and kept. Any `Fn(Point2) -> Point2`
/// closure is a mapper.
///
/// A mapper that is undefined at some input (a pole) should return a
/// non-finite point there; construction then fails with
/// [`AnimationError::UndefinedImage`](crate::error::AnimationError::UndefinedImage).
pub trait PointMapper {
    /// Maps `p` to its image.
    fn map(&self, p: Point2) -> Point2;
}

impl<F> PointMapper for F
where
    F: Fn(Point2) -> Point2,
{
    fn map(&self, p: Point2) -> Point2 {
        self(p)
    }
}

/// The identity map.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl PointMapper for Identity {
    fn map(&self, p: Point2) -> Point2 {
        p
    }
}
