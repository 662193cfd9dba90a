//! # Generation Scheduler
//!
//! Watches the externally supplied viewport Y and decides when the chunk
//! generator must run to stay ahead of the player.
//!
//! Level-triggered, not edge-triggered: the check is a pure comparison
//! against the frontier, re-evaluated every tick. If the viewport jumps
//! far in one tick, generation catches up one chunk per subsequent tick,
//! which bounds per-tick work.

use crate::config::LevelConfig;

/// Decides whether a chunk should be generated this tick.
#[derive(Clone, Copy, Debug)]
pub struct GenerationScheduler {
    safe_spawn_distance: f32,
}

impl GenerationScheduler {
    /// Builds a scheduler from validated config.
    #[must_use]
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            safe_spawn_distance: config.safe_spawn_distance,
        }
    }

    /// True while the viewport is within the safe spawn distance of the
    /// generation frontier.
    ///
    /// The viewport ascends by decreasing Y, so the frontier must stay at
    /// least `safe_spawn_distance` above (below in value) the viewport. A
    /// non-finite viewport reading disables generation for the tick.
    #[must_use]
    pub fn should_generate(&self, viewport_y: f32, frontier_y: f32) -> bool {
        if !viewport_y.is_finite() || !frontier_y.is_finite() {
            return false;
        }
        frontier_y > viewport_y - self.safe_spawn_distance
    }
}
