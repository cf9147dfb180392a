use crate::error::{Result, TessellationError};
use crate::math::Point2;

/// Number of divisions used when none is configured.
pub const DEFAULT_DIVISIONS: u32 = 50;

/// Parameters controlling how finely smooth curves are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    divisions: u32,
}

impl TessellationParams {
    /// Creates tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisions` is zero.
    pub fn new(divisions: u32) -> Result<Self> {
        if divisions == 0 {
            return Err(TessellationError::InvalidParameters(
                "at least one division is required".to_owned(),
            )
            .into());
        }
        Ok(Self { divisions })
    }

    /// Returns the number of divisions; a tessellated curve has one more vertex.
    #[must_use]
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// Returns the number of vertices a tessellated curve will have.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.divisions as usize + 1
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            divisions: DEFAULT_DIVISIONS,
        }
    }
}

/// A polyline approximation of a curve, ready to hand to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last vertex.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
