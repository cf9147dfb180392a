/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Complex number type used by the mappers.
pub type Complex = nalgebra::Complex<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Interprets `(x, y)` as `x + iy`.
#[must_use]
pub fn to_complex(p: Point2) -> Complex {
    Complex::new(p.x, p.y)
}

/// Interprets `re + i·im` as the point `(re, im)`.
#[must_use]
pub fn from_complex(z: Complex) -> Point2 {
    Point2::new(z.re, z.im)
}

/// Linear blend `a·(1 − s) + b·s`.
///
/// Returns `a` exactly at `s = 0` and `b` exactly at `s = 1`.
#[must_use]
pub fn lerp_point(a: &Point2, b: &Point2, s: f64) -> Point2 {
    Point2::from(a.coords.lerp(&b.coords, s))
}

/// Returns whether both coordinates are finite.
#[must_use]
pub fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
