mod animation_set;
mod curve_animator;
mod frame_clock;

pub use animation_set::AnimationSet;
pub use curve_animator::{AnimationState, CurveAnimator, DEFAULT_T_MAX};
pub use frame_clock::FrameClock;
