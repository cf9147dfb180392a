use crate::math::{from_complex, to_complex, Point2};

use super::PointMapper;

/// Complex squaring `z ↦ z²`.
///
/// For `z = x + iy` the image is `(x² − y², 2xy)`. Defined everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Squaring;

impl PointMapper for Squaring {
    fn map(&self, p: Point2) -> Point2 {
        let z = to_complex(p);
        from_complex(z * z)
    }
}
