use tracing::debug;

use crate::config::GridConfig;
use crate::error::Result;
use crate::mapping::PointMapper;
use crate::tessellation::Polyline;

use super::CurveAnimator;

/// An ordered collection of curve animations driven in lockstep.
///
/// Every broadcast reaches every member regardless of its own progress;
/// members that are already done ignore `advance` on their own.
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    animators: Vec<CurveAnimator>,
}

impl AnimationSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from animators, keeping their order.
    #[must_use]
    pub fn from_animators(animators: Vec<CurveAnimator>) -> Self {
        Self { animators }
    }

    /// Builds one animator per grid line of `config`, all mapped by `mapper`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the mapper is
    /// undefined at one of the sample points.
    pub fn from_config(config: &GridConfig, mapper: &impl PointMapper) -> Result<Self> {
        config.validate()?;
        let animators = config
            .sample_sequences()
            .into_iter()
            .map(|samples| {
                CurveAnimator::with_params(samples, mapper, config.t_max, config.tessellation)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(lines = animators.len(), t_max = config.t_max, "animation set built");
        Ok(Self { animators })
    }

    /// Appends an animator.
    pub fn push(&mut self, animator: CurveAnimator) {
        self.animators.push(animator);
    }

    /// Advances every member by `dt`.
    pub fn advance(&mut self, dt: f64) {
        for animator in &mut self.animators {
            animator.advance(dt);
        }
    }

    /// Resets every member to `t = 0`.
    pub fn reset(&mut self) {
        debug!(lines = self.animators.len(), "resetting animation set");
        for animator in &mut self.animators {
            animator.reset();
        }
    }

    /// Seeks every member to `t` (clamped per member).
    pub fn set_time(&mut self, t: f64) {
        for animator in &mut self.animators {
            animator.set_time(t);
        }
    }

    /// The current polylines, in member order.
    pub fn geometries(&self) -> impl Iterator<Item = &Polyline> + '_ {
        self.animators.iter().map(CurveAnimator::geometry)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveAnimator> {
        self.animators.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.animators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    /// Whether every member has reached its `t_max`. True for an empty set.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.animators.iter().all(CurveAnimator::is_done)
    }

    /// Clock of the first member, or `0` for an empty set.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.animators.first().map_or(0.0, CurveAnimator::time)
    }
}

impl<'a> IntoIterator for &'a AnimationSet {
    type Item = &'a CurveAnimator;
    type IntoIter = std::slice::Iter<'a, CurveAnimator>;

    fn into_iter(self) -> Self::IntoIter {
        self.animators.iter()
    }
}
