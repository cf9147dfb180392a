//! Headless driver for the grid morph: stands in for a render loop.
//!
//! Usage:
//! ```text
//! cargo run --example headless              # reset after 6 s of simulated time
//! cargo run --example headless -- 3.5       # reset after 3.5 s
//! RUST_LOG=complex_morph=trace cargo run --example headless
//! ```
//!
//! Frames are simulated at 60 Hz. Halfway through, the "Reset Animation"
//! action fires, then the grid is played until fully mapped.

use complex_morph::tessellation::Polyline;
use complex_morph::{AnimationSet, FrameClock, GridConfig, MorphError, Squaring};
use tracing::info;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Everything a frame callback needs, passed explicitly.
struct AppContext {
    animations: AnimationSet,
    clock: FrameClock,
    frames: u64,
}

impl AppContext {
    fn new(config: &GridConfig) -> Result<Self, MorphError> {
        Ok(Self {
            animations: AnimationSet::from_config(config, &Squaring)?,
            clock: FrameClock::new(),
            frames: 0,
        })
    }

    /// One display frame: advance, then hand the geometry to the "renderer".
    fn frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms);
        self.animations.advance(dt);
        self.frames += 1;
        draw(self.animations.geometries());
    }

    /// The control panel's "Reset Animation" button.
    fn reset_animation(&mut self) {
        self.animations.reset();
    }
}

fn draw<'a>(geometries: impl Iterator<Item = &'a Polyline>) {
    let (lines, vertices) = geometries.fold((0, 0), |(l, v), g| (l + 1, v + g.len()));
    tracing::trace!(lines, vertices, "frame drawn");
}

fn main() -> Result<(), MorphError> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("complex_morph=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let reset_after: f64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(6.0);

    let config = GridConfig::default();
    let mut app = AppContext::new(&config)?;
    info!(lines = app.animations.len(), t_max = config.t_max, "grid ready");

    let mut timestamp = FRAME_MS;
    let mut reset_done = false;
    while !(reset_done && app.animations.is_done()) {
        app.frame(timestamp);

        if app.frames % 60 == 0 {
            info!(t = app.animations.time(), "progress");
        }
        if !reset_done && app.animations.time() >= reset_after.min(config.t_max) {
            info!(t = app.animations.time(), "reset animation");
            app.reset_animation();
            reset_done = true;
        }
        timestamp += FRAME_MS;
    }

    for (index, animator) in app.animations.iter().enumerate() {
        let geometry = animator.geometry();
        info!(
            index,
            vertices = geometry.len(),
            length = geometry.length(),
            start = ?geometry.first(),
            end = ?geometry.last(),
            "fully mapped line"
        );
    }
    info!(frames = app.frames, "done");
    Ok(())
}
