//! # Headless Climb Simulation
//!
//! Drives the level engine the way the real game loop would: a simulated
//! climber ascends at a steady rate while the void chases from below,
//! one `update` per tick. No rendering, no physics - just the engine's
//! own contract, observed from outside.

use skywell_level::{LevelConfig, LevelEngine, LevelResult, LevelStats};
use skywell_shared::Vec2;

/// Tuning for a simulated run.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Number of ticks to simulate.
    pub ticks: u32,
    /// Viewport ascent per tick (world units; Y decreases upward).
    pub climb_speed: f32,
    /// Hazard ascent per tick. Slower than the climber, or the run is
    /// unwinnable by construction.
    pub hazard_speed: f32,
    /// Initial distance of the hazard below the viewport bottom.
    pub hazard_lag: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 1800, // 30 seconds at 60 FPS
            climb_speed: 12.0,
            hazard_speed: 9.0,
            hazard_lag: 250.0,
        }
    }
}

/// What a finished run looked like.
#[derive(Clone, Copy, Debug)]
pub struct SimReport {
    /// Ticks executed.
    pub ticks: u32,
    /// Engine counters at the end of the run.
    pub final_stats: LevelStats,
    /// Largest live platform count observed on any tick.
    pub peak_live: usize,
    /// Center of the topmost live platform at the end, if any survive.
    pub highest_platform: Option<Vec2>,
}

/// A climber-and-void driver around the level engine.
pub struct ClimbSim {
    engine: LevelEngine,
    config: SimConfig,
    viewport_y: f32,
    hazard_y: f32,
    ticks_run: u32,
    peak_live: usize,
}

impl ClimbSim {
    /// Builds a simulation over a fresh engine.
    ///
    /// # Errors
    ///
    /// Returns a config validation error from the engine.
    pub fn new(level: LevelConfig, config: SimConfig) -> LevelResult<Self> {
        let viewport_y = level.viewport_height;
        let hazard_y = level.viewport_height + config.hazard_lag;
        let engine = LevelEngine::new(level)?;
        Ok(Self {
            engine,
            config,
            viewport_y,
            hazard_y,
            ticks_run: 0,
            peak_live: 0,
        })
    }

    /// Pins the engine RNG for reproducible runs.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.engine = self.engine.with_rng_seed(seed);
        self
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        self.viewport_y -= self.config.climb_speed;
        self.hazard_y -= self.config.hazard_speed;
        self.engine.update(self.viewport_y, self.hazard_y);

        self.ticks_run += 1;
        self.peak_live = self.peak_live.max(self.engine.stats().total_platforms);
    }

    /// Runs the configured number of ticks, tears the engine down, and
    /// reports.
    pub fn run(mut self) -> SimReport {
        for _ in 0..self.config.ticks {
            self.step();
        }

        let final_stats = self.engine.stats();
        let highest_platform = self
            .engine
            .list_live_platforms()
            .into_iter()
            .map(|(_, aabb, _)| aabb.center())
            .min_by(|a, b| a.y.total_cmp(&b.y));

        self.engine.teardown();

        SimReport {
            ticks: self.ticks_run,
            final_stats,
            peak_live: self.peak_live,
            highest_platform,
        }
    }

    /// Engine counters mid-run.
    #[must_use]
    pub fn stats(&self) -> LevelStats {
        self.engine.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_run_generates_and_destroys() {
        let sim = ClimbSim::new(LevelConfig::default(), SimConfig::default())
            .unwrap()
            .with_rng_seed(42);
        let report = sim.run();

        assert_eq!(report.ticks, 1800);
        assert!(report.final_stats.chunks_generated > 10);
        assert!(report.peak_live > 0);
        // The void trails the climber, so the live set stays bounded well
        // under the engine cap
        assert!(report.peak_live < 256);
        // Teardown ran: report still carries the pre-teardown picture
        assert!(report.highest_platform.is_some());
    }

    #[test]
    fn test_sim_live_set_stays_bounded() {
        let mut sim = ClimbSim::new(LevelConfig::default(), SimConfig::default())
            .unwrap()
            .with_rng_seed(7);

        for _ in 0..1200 {
            sim.step();
            assert!(sim.stats().total_platforms < 256);
        }

        // Far more platforms were committed than remain live, so the
        // destruction sweep is genuinely releasing geometry
        let stats = sim.stats();
        let committed_floor = stats.chunks_generated as usize * 4;
        assert!(
            stats.total_platforms < committed_floor,
            "live {} vs committed at least {committed_floor}",
            stats.total_platforms
        );
    }
}
