//! # Chunk Generator
//!
//! Walks a vertical span, asking the reachability policy for the next
//! candidate position, the geometry utility for world clamping, and the
//! platform store for the commit. All mutable generation state lives in
//! one explicit [`GenerationCursor`], which makes a chunk walk a function
//! of (cursor, policy, RNG) plus store side effects.
//!
//! Rejected slots are skipped, never retried: the cursor's Y advances by
//! the drawn gap regardless, so a collision-heavy region yields a sparser
//! chunk instead of an unbounded retry loop.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use skywell_shared::{clamp_to_world, Vec2};

use crate::config::LevelConfig;
use crate::decoration::DecorationHook;
use crate::platform::{ChunkId, ChunkTheme, PlatformBlueprint, PlatformId};
use crate::policy::{EdgeSide, ReachabilityPolicy};
use crate::store::PlatformStore;

/// Number of distinct chunk theme tags handed to decoration hooks.
const THEME_COUNT: u32 = 4;

/// Process-wide mutable generation state.
///
/// `next_chunk_start_y` is the next unexplored Y and strictly decreases
/// as the world extends upward.
#[derive(Clone, Copy, Debug)]
pub struct GenerationCursor {
    /// Next unexplored Y. The generation frontier.
    pub next_chunk_start_y: f32,
    /// Number of chunks generated so far.
    pub chunks_generated: u32,
    /// Anchor x of the previously committed platform.
    pub last_placed_x: f32,
}

/// Produces chunks of reachable, non-overlapping platforms.
pub struct ChunkGenerator {
    config: LevelConfig,
    policy: ReachabilityPolicy,
    cursor: GenerationCursor,
    rng: StdRng,
}

impl ChunkGenerator {
    /// Creates a generator with OS-entropy randomness.
    #[must_use]
    pub fn new(config: &LevelConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a generator with the given RNG (tests pin this).
    #[must_use]
    pub fn with_rng(config: &LevelConfig, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            policy: ReachabilityPolicy::new(config),
            cursor: GenerationCursor {
                next_chunk_start_y: config.starting_platform_y(),
                chunks_generated: 0,
                last_placed_x: config.world_width / 2.0,
            },
            rng,
        }
    }

    /// Replaces the RNG with a seeded one. Test hosts call this before
    /// the first tick; it has no replay semantics.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Current generation state.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> &GenerationCursor {
        &self.cursor
    }

    /// Lays the guaranteed first foothold.
    ///
    /// Always full viewport width minus a small margin, never a light
    /// emitter, at a fixed offset above the viewport's bottom edge. This
    /// bypasses width randomization and light probability so the player
    /// starts on a deterministic, safe surface.
    pub fn generate_starting_platform(
        &mut self,
        store: &mut PlatformStore,
        hook: &mut dyn DecorationHook,
        tick: u64,
    ) -> Option<PlatformId> {
        let chunk_id = store.begin_chunk(ChunkTheme::default(), tick);
        let blueprint = PlatformBlueprint {
            center: Vec2::new(
                self.config.world_width / 2.0,
                self.config.starting_platform_y(),
            ),
            width: self.config.starting_platform_width(),
            height: self.config.platform_height,
            is_light_emitter: false,
            wants_collectible: false,
        };

        match store.try_commit(blueprint, chunk_id, tick, hook) {
            Ok(id) => Some(id),
            Err(rejection) => {
                // Only reachable if the host committed geometry before us
                tracing::warn!("starting platform rejected: {rejection}");
                None
            }
        }
    }

    /// Generates one chunk's worth of platforms and advances the cursor.
    ///
    /// Walks from the cursor's frontier to `frontier - chunk_height`
    /// (upward means decreasing Y). Every iteration draws a gap from the
    /// policy whether or not the previous slot committed.
    pub fn generate_chunk(
        &mut self,
        store: &mut PlatformStore,
        hook: &mut dyn DecorationHook,
        tick: u64,
    ) -> ChunkId {
        let start_y = self.cursor.next_chunk_start_y;
        let end_y = start_y - self.config.chunk_height;
        let chunk_index = self.cursor.chunks_generated;

        let theme = ChunkTheme(self.rng.gen_range(0..THEME_COUNT));
        let chunk_id = store.begin_chunk(theme, tick);

        let mut current_y = start_y;
        let mut committed = 0u32;
        let mut rejected = 0u32;

        loop {
            let gap = self.policy.next_vertical_gap(&mut self.rng);
            let next_y = current_y - gap;
            if next_y <= end_y {
                break;
            }
            current_y = next_y;

            let width = self
                .rng
                .gen_range(self.config.min_width..=self.config.max_width);
            let offset = self.policy.next_horizontal_offset(
                &mut self.rng,
                self.cursor.last_placed_x,
                current_y,
                chunk_index,
            );

            let raw_x = self.cursor.last_placed_x + offset;
            let x = clamp_to_world(
                raw_x,
                width / 2.0,
                self.config.edge_margin,
                self.config.world_width,
            );
            match raw_x.total_cmp(&x) {
                Ordering::Less => self.policy.note_edge_clamp(EdgeSide::Left),
                Ordering::Greater => self.policy.note_edge_clamp(EdgeSide::Right),
                Ordering::Equal => {}
            }

            let blueprint = PlatformBlueprint {
                center: Vec2::new(x, current_y),
                width,
                height: self.config.platform_height,
                is_light_emitter: self.rng.gen::<f32>() < self.config.light_emitter_probability,
                wants_collectible: self.rng.gen::<f32>() < self.config.collectible_probability,
            };

            // Rejection skips the slot; Y has already advanced, so the
            // chunk just comes out sparser
            match store.try_commit(blueprint, chunk_id, tick, hook) {
                Ok(_) => {
                    self.cursor.last_placed_x = x;
                    committed += 1;
                }
                Err(_) => {
                    rejected += 1;
                }
            }
        }

        self.cursor.next_chunk_start_y = end_y;
        self.cursor.chunks_generated += 1;

        tracing::debug!(
            "chunk {chunk_index} generated: {committed} platforms, {rejected} rejected, frontier {end_y}"
        );

        chunk_id
    }
}
