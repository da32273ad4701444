//! Headless runtime primitives for diagnostics execution.
//!
//! Frames advance by a fixed logical tick rather than wall-clock time, so a
//! headless run is bit-identical every time it executes.

use anyhow::{bail, Result};
use waddle_core::Vec3;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
    /// Fixed viewer (camera) position used for impulse directions.
    pub viewer: Vec3,
    /// Seed for popup placement jitter.
    pub seed: u64,
    /// Upper bound on total frames a run may execute.
    pub frame_cap: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            viewer: Vec3::ZERO,
            seed: 0xD0CC,
            frame_cap: 100_000,
        }
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct FrameTick {
    pub frame_index: u64,
    pub elapsed_ms: u64,
    /// Frame time in seconds, derived from the logical tick.
    pub dt: f64,
}

/// Deterministic headless frame loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget in headless mode.
    pub fn run<F>(cfg: HeadlessRunConfig, frames: u64, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&FrameTick) -> Result<()>,
    {
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        if frames > cfg.frame_cap {
            bail!("frame budget {frames} exceeds cap {}", cfg.frame_cap);
        }

        let dt = cfg.tick_ms as f64 / 1000.0;
        for frame in 0..frames {
            on_frame(&FrameTick {
                frame_index: frame,
                elapsed_ms: cfg.tick_ms.saturating_mul(frame),
                dt,
            })?;
        }

        Ok(())
    }
}
