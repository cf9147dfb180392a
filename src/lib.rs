pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mapping;
pub mod math;
pub mod tessellation;

pub use animation::{AnimationSet, AnimationState, CurveAnimator, FrameClock};
pub use config::GridConfig;
pub use error::{MorphError, Result};
pub use mapping::{Identity, PointMapper, Squaring};
