//! # Level Configuration
//!
//! Every tuning constant of the generation engine, loaded once at startup
//! from an external TOML file and validated before the engine is built.
//!
//! The reachability constants (`v_min`/`v_max`, `h_min`/`h_max`) are an
//! **input contract**: they must be kept consistent with the player
//! movement model by whoever tunes the game. The engine treats them as
//! opaque and never re-derives them from jump physics.

use std::path::Path;

use serde::Deserialize;

use crate::error::{LevelError, LevelResult};

/// All tuning constants for the level engine.
///
/// `Default` mirrors the reference tuning: a 1024x768 viewport, jump
/// bands of 80-140 vertical / 60-120 horizontal.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelConfig {
    /// Playfield width in world units. Platforms never leave `[0, world_width]`.
    pub world_width: f32,
    /// Viewport height, used to place the starting platform.
    pub viewport_height: f32,

    /// Fixed platform thickness.
    pub platform_height: f32,
    /// Minimum randomized platform width.
    pub min_width: f32,
    /// Maximum randomized platform width.
    pub max_width: f32,
    /// Widths below this are rejected at the store boundary.
    pub min_visible_width: f32,

    /// Lower bound of the normal vertical reachability band.
    pub v_min: f32,
    /// Upper bound of the normal vertical reachability band.
    /// Must stay at or below the player's single-jump reach.
    pub v_max: f32,
    /// Probability of drawing from the stepping-stone band instead of the
    /// normal band.
    pub stepping_stone_chance: f32,
    /// Width of the stepping-stone band as a fraction of `v_max - v_min`,
    /// anchored at `v_min`. Keeps every drawn gap inside `[v_min, v_max]`.
    pub stepping_stone_fraction: f32,

    /// Minimum absolute horizontal offset between consecutive platforms.
    pub h_min: f32,
    /// Maximum absolute horizontal offset between consecutive platforms.
    /// Must stay at or below the player's single-jump horizontal reach.
    pub h_max: f32,
    /// The unrestricted-random pattern draws within this fraction of `h_max`.
    pub random_pattern_fraction: f32,
    /// The close-sequence pattern stretches offsets up to this multiple of
    /// `h_min` (clamped to `h_max`).
    pub close_sequence_stretch: f32,
    /// Probability that a chunk uses its preferred pattern rather than a
    /// uniformly random one.
    pub preferred_pattern_bias: f32,

    /// Probability that a committed platform is a light emitter.
    pub light_emitter_probability: f32,
    /// Probability that a committed platform is offered a collectible.
    pub collectible_probability: f32,

    /// Vertical span covered by one generated chunk.
    pub chunk_height: f32,
    /// Generation triggers while the viewport is within this distance of
    /// the frontier.
    pub safe_spawn_distance: f32,
    /// The destruction threshold trails the hazard boundary by this offset.
    pub destruction_offset: f32,
    /// Generation back-pressure: no new chunk while this many platforms
    /// are live.
    pub max_live_platforms: usize,

    /// Platforms keep this margin from the world's side edges.
    pub edge_margin: f32,
    /// The starting platform spans the viewport width minus this margin.
    pub starting_width_margin: f32,
    /// The starting platform sits this far above the viewport's bottom edge.
    pub starting_y_offset: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            world_width: 1024.0,
            viewport_height: 768.0,
            platform_height: 20.0,
            min_width: 80.0,
            max_width: 180.0,
            min_visible_width: 24.0,
            v_min: 80.0,
            v_max: 140.0,
            stepping_stone_chance: 0.2,
            stepping_stone_fraction: 0.25,
            h_min: 60.0,
            h_max: 120.0,
            random_pattern_fraction: 0.75,
            close_sequence_stretch: 1.4,
            preferred_pattern_bias: 0.7,
            light_emitter_probability: 0.15,
            collectible_probability: 0.25,
            chunk_height: 600.0,
            safe_spawn_distance: 800.0,
            destruction_offset: 150.0,
            max_live_platforms: 256,
            edge_margin: 60.0,
            starting_width_margin: 40.0,
            starting_y_offset: 100.0,
        }
    }
}

impl LevelConfig {
    /// Parses a config from a TOML string and validates it.
    ///
    /// Missing fields fall back to the defaults, so a tuning file only
    /// needs to name what it changes.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::Parse`] on malformed TOML and
    /// [`LevelError::InvalidConfig`] on nonsensical values.
    pub fn from_toml_str(s: &str) -> LevelResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::Io`] if the file cannot be read, plus the
    /// errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> LevelResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::InvalidConfig`] naming the offending value.
    pub fn validate(&self) -> LevelResult<()> {
        let finite = [
            ("world_width", self.world_width),
            ("viewport_height", self.viewport_height),
            ("platform_height", self.platform_height),
            ("min_width", self.min_width),
            ("max_width", self.max_width),
            ("min_visible_width", self.min_visible_width),
            ("v_min", self.v_min),
            ("v_max", self.v_max),
            ("h_min", self.h_min),
            ("h_max", self.h_max),
            ("chunk_height", self.chunk_height),
            ("safe_spawn_distance", self.safe_spawn_distance),
            ("destruction_offset", self.destruction_offset),
            ("edge_margin", self.edge_margin),
            ("starting_width_margin", self.starting_width_margin),
            ("starting_y_offset", self.starting_y_offset),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(LevelError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.world_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(LevelError::InvalidConfig(
                "world extents must be positive".to_string(),
            ));
        }
        if self.platform_height <= 0.0 {
            return Err(LevelError::InvalidConfig(
                "platform_height must be positive".to_string(),
            ));
        }
        if self.min_width <= 0.0 || self.min_width > self.max_width {
            return Err(LevelError::InvalidConfig(format!(
                "width range [{}, {}] is invalid",
                self.min_width, self.max_width
            )));
        }
        if self.min_visible_width <= 0.0 || self.min_visible_width > self.min_width {
            return Err(LevelError::InvalidConfig(format!(
                "min_visible_width {} must be in (0, min_width]",
                self.min_visible_width
            )));
        }
        if self.v_min <= 0.0 || self.v_min > self.v_max {
            return Err(LevelError::InvalidConfig(format!(
                "vertical band [{}, {}] is invalid",
                self.v_min, self.v_max
            )));
        }
        if self.h_min < 0.0 || self.h_min > self.h_max {
            return Err(LevelError::InvalidConfig(format!(
                "horizontal band [{}, {}] is invalid",
                self.h_min, self.h_max
            )));
        }
        if self.chunk_height < self.v_max {
            return Err(LevelError::InvalidConfig(format!(
                "chunk_height {} cannot fit a single vertical gap (v_max {})",
                self.chunk_height, self.v_max
            )));
        }
        if 2.0 * self.edge_margin + self.max_width > self.world_width {
            return Err(LevelError::InvalidConfig(format!(
                "world_width {} cannot fit max_width {} inside edge_margin {}",
                self.world_width, self.max_width, self.edge_margin
            )));
        }

        let probabilities = [
            ("stepping_stone_chance", self.stepping_stone_chance),
            ("stepping_stone_fraction", self.stepping_stone_fraction),
            ("random_pattern_fraction", self.random_pattern_fraction),
            ("preferred_pattern_bias", self.preferred_pattern_bias),
            ("light_emitter_probability", self.light_emitter_probability),
            ("collectible_probability", self.collectible_probability),
        ];
        for (name, value) in probabilities {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LevelError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.close_sequence_stretch < 1.0 || !self.close_sequence_stretch.is_finite() {
            return Err(LevelError::InvalidConfig(format!(
                "close_sequence_stretch must be >= 1, got {}",
                self.close_sequence_stretch
            )));
        }
        if self.max_live_platforms == 0 {
            return Err(LevelError::InvalidConfig(
                "max_live_platforms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Upper bound of the stepping-stone band.
    ///
    /// The band is anchored at `v_min` so every drawn gap, stepping-stone
    /// or not, stays inside `[v_min, v_max]`.
    #[inline]
    #[must_use]
    pub fn stepping_stone_max(&self) -> f32 {
        self.v_min + self.stepping_stone_fraction * (self.v_max - self.v_min)
    }

    /// Width of the starting platform for the configured viewport.
    #[inline]
    #[must_use]
    pub fn starting_platform_width(&self) -> f32 {
        self.world_width - self.starting_width_margin
    }

    /// Center-y of the starting platform for the configured viewport.
    #[inline]
    #[must_use]
    pub fn starting_platform_y(&self) -> f32 {
        self.viewport_height - self.starting_y_offset
    }
}
