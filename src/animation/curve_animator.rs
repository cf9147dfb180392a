use tracing::{debug, trace, warn};

use crate::error::{AnimationError, Result};
use crate::geometry::SplineCurve;
use crate::mapping::PointMapper;
use crate::math::{is_finite, lerp_point, Point2};
use crate::tessellation::{Polyline, TessellationParams};

/// Duration of the morph when none is configured.
pub const DEFAULT_T_MAX: f64 = 10.0;

/// Whether advancing the clock still has an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// `t < t_max`.
    Running,
    /// `t == t_max`; `advance` is a no-op.
    Done,
}

/// Morphs one curve from its sample points to their images under a mapper.
///
/// The animator owns the sample points, their images (computed once at
/// construction) and a clock `t ∈ [0, t_max]`. Every change of `t` rebuilds
/// the interpolated points and the smoothed polyline from scratch, so the
/// geometry depends only on the samples, their images, `t` and `t_max`.
#[derive(Debug, Clone)]
pub struct CurveAnimator {
    samples: Vec<Point2>,
    mapped: Vec<Point2>,
    t: f64,
    t_max: f64,
    params: TessellationParams,
    points: Vec<Point2>,
    geometry: Polyline,
    rebuilds: u64,
}

impl CurveAnimator {
    /// Creates an animator at `t = 0` with default tessellation parameters.
    ///
    /// # Errors
    ///
    /// See [`CurveAnimator::with_params`].
    pub fn new(samples: Vec<Point2>, mapper: &impl PointMapper, t_max: f64) -> Result<Self> {
        Self::with_params(samples, mapper, t_max, TessellationParams::default())
    }

    /// Creates an animator at `t = 0`, mapping every sample point once.
    ///
    /// # Errors
    ///
    /// - `AnimationError::EmptySamples` if `samples` is empty
    /// - `AnimationError::NonFiniteSample` if a sample has a non-finite coordinate
    /// - `AnimationError::InvalidDuration` if `t_max` is not finite and positive
    /// - `AnimationError::UndefinedImage` if the mapper yields a non-finite image
    pub fn with_params(
        samples: Vec<Point2>,
        mapper: &impl PointMapper,
        t_max: f64,
        params: TessellationParams,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(AnimationError::EmptySamples.into());
        }
        if !(t_max.is_finite() && t_max > 0.0) {
            return Err(AnimationError::InvalidDuration(t_max).into());
        }
        if let Some(index) = samples.iter().position(|p| !is_finite(p)) {
            return Err(AnimationError::NonFiniteSample { index }.into());
        }

        let mapped: Vec<Point2> = samples.iter().map(|p| mapper.map(*p)).collect();
        if let Some(index) = mapped.iter().position(|p| !is_finite(p)) {
            return Err(AnimationError::UndefinedImage { index }.into());
        }

        debug!(
            samples = samples.len(),
            t_max,
            divisions = params.divisions(),
            "curve animator created"
        );

        let mut animator = Self {
            points: samples.clone(),
            samples,
            mapped,
            t: 0.0,
            t_max,
            params,
            geometry: Polyline::default(),
            rebuilds: 0,
        };
        animator.rebuild();
        Ok(animator)
    }

    /// Moves the clock forward by `dt`, stopping at `t_max`.
    ///
    /// Does nothing when `dt` is zero, negative or not finite, or when the
    /// animation is already done.
    pub fn advance(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() || self.is_done() {
            return;
        }
        self.t = (self.t + dt).min(self.t_max);
        if self.is_done() {
            debug!(t_max = self.t_max, "curve animation done");
        }
        self.rebuild();
    }

    /// Seeks to `new_t`, clamped into `[0, t_max]`. NaN is ignored.
    pub fn set_time(&mut self, new_t: f64) {
        if new_t.is_nan() {
            warn!("ignoring NaN animation time");
            return;
        }
        self.t = new_t.clamp(0.0, self.t_max);
        self.rebuild();
    }

    /// Returns the clock to `t = 0`, restoring the identity shape.
    pub fn reset(&mut self) {
        self.t = 0.0;
        self.rebuild();
    }

    /// Current clock value.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Clock value at which the curve is fully mapped.
    #[must_use]
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Blend weight `t / t_max` in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.t / self.t_max
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        if self.t >= self.t_max {
            AnimationState::Done
        } else {
            AnimationState::Running
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state() == AnimationState::Done
    }

    /// The points of the curve at rest.
    #[must_use]
    pub fn samples(&self) -> &[Point2] {
        &self.samples
    }

    /// The images of [`samples`](Self::samples), index for index.
    #[must_use]
    pub fn mapped(&self) -> &[Point2] {
        &self.mapped
    }

    /// The interpolated points for the current clock value.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The most recently built polyline.
    #[must_use]
    pub fn geometry(&self) -> &Polyline {
        &self.geometry
    }

    /// Same as [`geometry`](Self::geometry).
    #[must_use]
    pub fn current_geometry(&self) -> &Polyline {
        self.geometry()
    }

    /// Number of geometry rebuilds since construction, the initial one included.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    fn rebuild(&mut self) {
        let s = self.progress();
        self.points.clear();
        self.points.extend(
            self.samples
                .iter()
                .zip(&self.mapped)
                .map(|(z, w)| lerp_point(z, w, s)),
        );

        self.geometry = SplineCurve::from_nonempty(self.points.clone()).tessellate(self.params);
        self.rebuilds += 1;
        trace!(t = self.t, rebuilds = self.rebuilds, "curve geometry rebuilt");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mapping::{Identity, Squaring};
    use approx::assert_relative_eq;

    fn line_samples() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]
    }

    fn squaring_animator() -> CurveAnimator {
        CurveAnimator::new(line_samples(), &Squaring, 10.0).unwrap()
    }

    fn assert_points_eq(actual: &[Point2], expected: &[Point2]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn starts_at_identity() {
        let anim = squaring_animator();
        assert!(anim.time().abs() < f64::EPSILON);
        assert_eq!(anim.state(), AnimationState::Running);
        assert_eq!(anim.points(), line_samples().as_slice());
        assert_eq!(anim.rebuild_count(), 1);
        assert_eq!(anim.geometry().len(), 51);
    }

    #[test]
    fn mapped_is_computed_once_and_aligned() {
        let anim = squaring_animator();
        assert_eq!(anim.mapped().len(), anim.samples().len());
        assert_points_eq(
            anim.mapped(),
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(4.0, 0.0),
            ],
        );
    }

    #[test]
    fn halfway_blends_linearly() {
        let mut anim = squaring_animator();
        anim.set_time(5.0);
        assert_points_eq(
            anim.points(),
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(3.0, 0.0),
            ],
        );
    }

    #[test]
    fn full_time_equals_mapped() {
        let mut anim = squaring_animator();
        anim.set_time(10.0);
        assert!(anim.is_done());
        assert_eq!(anim.points(), anim.mapped());
    }

    #[test]
    fn advance_accumulates_and_clamps() {
        let mut anim = squaring_animator();
        anim.advance(4.0);
        assert_relative_eq!(anim.time(), 4.0);
        anim.advance(4.0);
        assert_relative_eq!(anim.time(), 8.0);
        anim.advance(4.0);
        assert_relative_eq!(anim.time(), 10.0);
        assert!(anim.is_done());
        assert_eq!(anim.points(), anim.mapped());
    }

    #[test]
    fn single_large_step_does_not_overshoot() {
        let mut anim = squaring_animator();
        anim.advance(1e6);
        assert_relative_eq!(anim.time(), anim.t_max());
        assert_eq!(anim.points(), anim.mapped());
    }

    #[test]
    fn advance_zero_is_a_true_no_op() {
        let mut anim = squaring_animator();
        anim.advance(2.0);
        let before = anim.rebuild_count();
        anim.advance(0.0);
        assert_eq!(anim.rebuild_count(), before);
        assert_relative_eq!(anim.time(), 2.0);
    }

    #[test]
    fn advance_when_done_is_a_no_op() {
        let mut anim = squaring_animator();
        anim.advance(10.0);
        let before = anim.rebuild_count();
        let geometry = anim.geometry().clone();
        anim.advance(1.0);
        assert_eq!(anim.rebuild_count(), before);
        assert_eq!(anim.geometry(), &geometry);
    }

    #[test]
    fn advance_ignores_negative_and_non_finite_steps() {
        let mut anim = squaring_animator();
        anim.advance(3.0);
        let before = anim.rebuild_count();
        anim.advance(-1.0);
        anim.advance(f64::NAN);
        anim.advance(f64::INFINITY);
        assert_eq!(anim.rebuild_count(), before);
        assert_relative_eq!(anim.time(), 3.0);
    }

    #[test]
    fn repeated_advance_never_decreases_time() {
        let mut anim = squaring_animator();
        let mut last = anim.time();
        for _ in 0..1000 {
            anim.advance(0.016);
            assert!(anim.time() >= last);
            assert!(anim.time() <= anim.t_max());
            last = anim.time();
        }
        assert!(anim.is_done());
    }

    #[test]
    fn set_time_clamps() {
        let mut anim = squaring_animator();
        anim.set_time(-5.0);
        assert!(anim.time().abs() < f64::EPSILON);
        anim.set_time(25.0);
        assert_relative_eq!(anim.time(), 10.0);
        anim.set_time(f64::NEG_INFINITY);
        assert!(anim.time().abs() < f64::EPSILON);
    }

    #[test]
    fn set_time_ignores_nan() {
        let mut anim = squaring_animator();
        anim.set_time(6.0);
        let before = anim.rebuild_count();
        anim.set_time(f64::NAN);
        assert_eq!(anim.rebuild_count(), before);
        assert_relative_eq!(anim.time(), 6.0);
    }

    #[test]
    fn set_time_leaves_done_state() {
        let mut anim = squaring_animator();
        anim.advance(10.0);
        anim.set_time(9.0);
        assert_eq!(anim.state(), AnimationState::Running);
        anim.advance(0.5);
        assert_relative_eq!(anim.time(), 9.5);
    }

    #[test]
    fn reset_restores_identity_geometry() {
        let fresh = squaring_animator();
        let mut anim = squaring_animator();
        anim.advance(7.3);
        anim.reset();
        assert!(anim.time().abs() < f64::EPSILON);
        assert_eq!(anim.points(), line_samples().as_slice());
        assert_eq!(anim.geometry(), fresh.geometry());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut anim = squaring_animator();
        anim.advance(3.0);
        anim.reset();
        let once_points = anim.points().to_vec();
        let once_geometry = anim.geometry().clone();
        anim.reset();
        assert!(anim.time().abs() < f64::EPSILON);
        assert_eq!(anim.points(), once_points.as_slice());
        assert_eq!(anim.geometry(), &once_geometry);
    }

    #[test]
    fn geometry_is_a_function_of_time() {
        let mut a = squaring_animator();
        let mut b = squaring_animator();
        a.advance(1.0);
        a.advance(2.0);
        a.advance(0.5);
        b.set_time(3.5);
        assert_eq!(a.points(), b.points());
        assert_eq!(a.geometry(), b.geometry());
    }

    #[test]
    fn geometry_endpoints_follow_interpolated_endpoints() {
        let mut anim = squaring_animator();
        for t in [0.0, 2.5, 5.0, 10.0] {
            anim.set_time(t);
            let geometry = anim.geometry();
            assert_eq!(geometry.first(), anim.points().first());
            assert_eq!(geometry.last(), anim.points().last());
        }
    }

    #[test]
    fn custom_params_change_resolution() {
        let params = TessellationParams::new(10).unwrap();
        let anim = CurveAnimator::with_params(line_samples(), &Squaring, 10.0, params).unwrap();
        assert_eq!(anim.geometry().len(), 11);
    }

    #[test]
    fn identity_mapper_never_moves() {
        let samples = vec![Point2::new(-1.0, 2.0), Point2::new(0.5, 0.5)];
        let mut anim = CurveAnimator::new(samples.clone(), &Identity, 4.0).unwrap();
        anim.advance(2.0);
        assert_eq!(anim.points(), samples.as_slice());
    }

    #[test]
    fn construction_rejects_bad_input() {
        assert!(CurveAnimator::new(Vec::new(), &Squaring, 10.0).is_err());
        assert!(CurveAnimator::new(line_samples(), &Squaring, 0.0).is_err());
        assert!(CurveAnimator::new(line_samples(), &Squaring, f64::INFINITY).is_err());
        assert!(
            CurveAnimator::new(vec![Point2::new(f64::NAN, 0.0)], &Squaring, 10.0).is_err()
        );
    }

    #[test]
    fn pole_is_reported_as_undefined_image() {
        let reciprocal = |p: Point2| {
            let r2 = p.x * p.x + p.y * p.y;
            Point2::new(p.x / r2, -p.y / r2)
        };
        let err = CurveAnimator::new(line_samples(), &reciprocal, 10.0).unwrap_err();
        assert!(matches!(
            err,
            crate::error::MorphError::Animation(AnimationError::UndefinedImage { index: 0 })
        ));
    }
}
