//! # Level Engine
//!
//! The facade the host game talks to. Owns every subsystem and runs the
//! per-tick orchestration:
//!
//! ```text
//! Tick N:
//! ┌────────────────────────────────────────────────────────────┐
//! │ 1. GENERATION                                              │
//! │    ├─ First tick: lay the starting platform                │
//! │    ├─ Scheduler checks viewport vs frontier                │
//! │    └─ At most one chunk generated (bounded per-tick work)  │
//! │                                                            │
//! │ 2. DESTRUCTION                                             │
//! │    └─ Sweep the store against the hazard threshold         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generation always completes before destruction within a tick, so a
//! platform can never be created and destroyed in the same logical step
//! in a way that breaks decoration invariants.

use skywell_shared::Aabb;

use crate::config::LevelConfig;
use crate::decoration::{DecorationHook, NullDecorationHook};
use crate::destruction::DestructionManager;
use crate::error::LevelResult;
use crate::generator::ChunkGenerator;
use crate::platform::PlatformId;
use crate::scheduler::GenerationScheduler;
use crate::store::PlatformStore;

/// Diagnostic counters exposed to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LevelStats {
    /// Live platform count.
    pub total_platforms: usize,
    /// Live platforms flagged as light emitters.
    pub light_emitter_count: usize,
    /// Chunks generated since startup.
    pub chunks_generated: u32,
    /// The generation frontier (next unexplored Y).
    pub last_generated_y: f32,
}

/// The level generation engine.
///
/// Single-threaded and tick-driven: every operation runs synchronously
/// inside [`LevelEngine::update`], nothing blocks or suspends.
pub struct LevelEngine {
    config: LevelConfig,
    store: PlatformStore,
    generator: ChunkGenerator,
    scheduler: GenerationScheduler,
    destruction: DestructionManager,
    hook: Box<dyn DecorationHook>,
    tick: u64,
    started: bool,
    torn_down: bool,
}

impl LevelEngine {
    /// Creates an engine with no decoration hook attached.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LevelError::InvalidConfig`] on a config
    /// that fails validation.
    pub fn new(config: LevelConfig) -> LevelResult<Self> {
        Self::with_hook(config, Box::new(NullDecorationHook))
    }

    /// Creates an engine with the given decoration hook.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LevelError::InvalidConfig`] on a config
    /// that fails validation.
    pub fn with_hook(config: LevelConfig, hook: Box<dyn DecorationHook>) -> LevelResult<Self> {
        config.validate()?;
        Ok(Self {
            store: PlatformStore::new(&config),
            generator: ChunkGenerator::new(&config),
            scheduler: GenerationScheduler::new(&config),
            destruction: DestructionManager::new(&config),
            config,
            hook,
            tick: 0,
            started: false,
            torn_down: false,
        })
    }

    /// Pins the generator RNG. Call before the first tick; tests use this
    /// to make runs reproducible. No replay semantics are attached.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.generator.reseed(seed);
        self
    }

    /// Runs one tick of the engine.
    ///
    /// `viewport_y` and `hazard_y` are the per-tick scalar readings from
    /// the viewport and hazard collaborators. Non-finite readings disable
    /// the corresponding half of the tick (nothing is generated or
    /// destroyed on bad input). After [`LevelEngine::teardown`] this is a
    /// no-op.
    pub fn update(&mut self, viewport_y: f32, hazard_y: f32) {
        if self.torn_down {
            return;
        }
        self.tick += 1;

        // -- Generation half -------------------------------------------------
        if !self.started {
            self.generator
                .generate_starting_platform(&mut self.store, self.hook.as_mut(), self.tick);
            self.started = true;
        }

        let under_cap = self.store.len() < self.config.max_live_platforms;
        let frontier = self.generator.cursor().next_chunk_start_y;
        if under_cap && self.scheduler.should_generate(viewport_y, frontier) {
            self.generator
                .generate_chunk(&mut self.store, self.hook.as_mut(), self.tick);
        }

        // -- Destruction half ------------------------------------------------
        self.destruction
            .sweep(hazard_y, &mut self.store, self.hook.as_mut());
    }

    /// Read-only listing for the physics and rendering collaborators.
    #[must_use]
    pub fn list_live_platforms(&self) -> Vec<(PlatformId, Aabb, bool)> {
        self.store.list_live()
    }

    /// Diagnostic counters.
    #[must_use]
    pub fn stats(&self) -> LevelStats {
        LevelStats {
            total_platforms: self.store.len(),
            light_emitter_count: self.store.light_emitter_count(),
            chunks_generated: self.generator.cursor().chunks_generated,
            last_generated_y: self.generator.cursor().next_chunk_start_y,
        }
    }

    /// Read-only access to the platform store.
    #[must_use]
    pub fn store(&self) -> &PlatformStore {
        &self.store
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Releases every live platform's decoration handles and clears all
    /// internal state. Safe to call redundantly; the engine no-ops from
    /// then on.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.store.clear(self.hook.as_mut());
        self.torn_down = true;
        tracing::debug!("level engine torn down after {} ticks", self.tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LevelEngine {
        LevelEngine::new(LevelConfig::default())
            .unwrap()
            .with_rng_seed(42)
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = LevelConfig {
            v_min: 200.0,
            ..LevelConfig::default()
        };
        assert!(LevelEngine::new(config).is_err());
    }

    #[test]
    fn test_first_tick_lays_starting_platform() {
        let mut engine = engine();
        engine.update(668.0, 2000.0);

        let live = engine.list_live_platforms();
        assert!(!live.is_empty());
        let stats = engine.stats();
        assert!(stats.total_platforms >= 1);
    }

    #[test]
    fn test_generation_catches_up_one_chunk_per_tick() {
        let mut engine = engine();

        engine.update(668.0, 2000.0);
        let after_first = engine.stats().chunks_generated;

        // Viewport parked: the frontier keeps extending one chunk per
        // tick until it clears the safe spawn distance
        for _ in 0..10 {
            engine.update(668.0, 2000.0);
        }
        let stats = engine.stats();
        assert!(stats.chunks_generated > after_first);
        assert!(stats.last_generated_y <= 668.0 - 800.0);

        // Once satisfied, a parked viewport generates nothing further
        let settled = engine.stats().chunks_generated;
        engine.update(668.0, 2000.0);
        assert_eq!(engine.stats().chunks_generated, settled);
    }

    #[test]
    fn test_destruction_runs_after_generation() {
        let mut engine = engine();
        for _ in 0..5 {
            engine.update(668.0, 2000.0);
        }
        let before = engine.stats().total_platforms;

        // Void jumps above the starting platform: everything below goes
        engine.update(668.0, 300.0);
        let after = engine.stats().total_platforms;
        assert!(after < before);
        for (_, aabb, _) in engine.list_live_platforms() {
            assert!(aabb.center().y <= 450.0);
        }
    }

    #[test]
    fn test_live_platform_cap_backpressure() {
        let config = LevelConfig {
            max_live_platforms: 1,
            ..LevelConfig::default()
        };
        let mut engine = LevelEngine::new(config).unwrap().with_rng_seed(42);

        for _ in 0..5 {
            engine.update(668.0, 2000.0);
        }

        // The starting platform fills the cap; no chunk ever generates
        let stats = engine.stats();
        assert_eq!(stats.total_platforms, 1);
        assert_eq!(stats.chunks_generated, 0);
    }

    #[test]
    fn test_missing_inputs_change_nothing() {
        let mut engine = engine();
        engine.update(668.0, 2000.0);
        let before = engine.stats();

        engine.update(f32::NAN, f32::NAN);
        let after = engine.stats();
        assert_eq!(before.chunks_generated, after.chunks_generated);
        assert_eq!(before.total_platforms, after.total_platforms);
    }

    #[test]
    fn test_teardown_is_idempotent_and_final() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.update(668.0, 2000.0);
        }
        assert!(engine.stats().total_platforms > 0);

        engine.teardown();
        assert_eq!(engine.stats().total_platforms, 0);
        assert!(engine.list_live_platforms().is_empty());

        // Redundant teardown and post-teardown ticks are no-ops
        engine.teardown();
        engine.update(668.0, 2000.0);
        assert_eq!(engine.stats().total_platforms, 0);
    }

    #[test]
    fn test_stats_mirror_store_contents() {
        let mut engine = engine();
        for _ in 0..6 {
            engine.update(668.0, 2000.0);
        }

        let stats = engine.stats();
        let live = engine.list_live_platforms();
        assert_eq!(stats.total_platforms, live.len());
        let emitters = live.iter().filter(|(_, _, lit)| *lit).count();
        assert_eq!(stats.light_emitter_count, emitters);
    }
}
