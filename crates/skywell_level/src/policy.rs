//! # Reachability Policy
//!
//! Converts the configured jump-arc constants into legal platform spacing.
//! Every gap this policy produces is jumpable by construction: vertical
//! draws stay inside `[v_min, v_max]`, horizontal offsets inside
//! `[h_min, h_max]` in absolute value.
//!
//! The policy never fails. Out-of-range inputs are clamped, not rejected.

use rand::Rng;

use crate::config::LevelConfig;

/// Which world edge a candidate was clamped against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeSide {
    /// Clamped against x = 0.
    Left,
    /// Clamped against x = world_width.
    Right,
}

/// The three horizontal placement patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pattern {
    /// Sign alternates with a slow sine of chunk index and Y.
    Zigzag,
    /// Unrestricted random within a fraction of the max horizontal gap.
    Random,
    /// Tight offsets near `h_min` for easier runs.
    CloseSequence,
}

impl Pattern {
    const ALL: [Self; 3] = [Self::Zigzag, Self::Random, Self::CloseSequence];
}

/// Produces candidate spacing that is guaranteed jumpable from the
/// previous platform, using configured constants rather than a physics
/// simulation.
#[derive(Clone, Debug)]
pub struct ReachabilityPolicy {
    v_min: f32,
    v_max: f32,
    stepping_stone_chance: f32,
    stepping_stone_max: f32,
    h_min: f32,
    h_max: f32,
    random_pattern_fraction: f32,
    close_sequence_stretch: f32,
    preferred_pattern_bias: f32,
    world_width: f32,
    edge_margin: f32,
    /// Set after a candidate was clamped against a world edge; the next
    /// offset is pushed away from that edge, then the bias clears.
    edge_bias: Option<EdgeSide>,
}

impl ReachabilityPolicy {
    /// Builds a policy from validated config.
    #[must_use]
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            v_min: config.v_min,
            v_max: config.v_max,
            stepping_stone_chance: config.stepping_stone_chance,
            stepping_stone_max: config.stepping_stone_max(),
            h_min: config.h_min,
            h_max: config.h_max,
            random_pattern_fraction: config.random_pattern_fraction,
            close_sequence_stretch: config.close_sequence_stretch,
            preferred_pattern_bias: config.preferred_pattern_bias,
            world_width: config.world_width,
            edge_margin: config.edge_margin,
            edge_bias: None,
        }
    }

    /// Draws the next vertical gap.
    ///
    /// Majority of draws come from the normal band `[v_min, v_max]`; a
    /// minority come from the narrower stepping-stone band anchored at
    /// `v_min`. Either way the result is inside `[v_min, v_max]`.
    pub fn next_vertical_gap(&self, rng: &mut impl Rng) -> f32 {
        if rng.gen::<f32>() < self.stepping_stone_chance && self.stepping_stone_max > self.v_min {
            rng.gen_range(self.v_min..=self.stepping_stone_max)
        } else {
            rng.gen_range(self.v_min..=self.v_max)
        }
    }

    /// Draws the next horizontal offset from the previous platform's
    /// anchor x.
    ///
    /// Picks one of three patterns (the chunk's preferred pattern most of
    /// the time), enforces the `h_min` floor so consecutive platforms are
    /// never stacked at the same x, applies any pending wall-bounce bias,
    /// and flips toward the world interior when the anchor already hugs
    /// an edge. The result is inside `[h_min, h_max]` in absolute value.
    pub fn next_horizontal_offset(
        &mut self,
        rng: &mut impl Rng,
        previous_x: f32,
        current_y: f32,
        chunk_index: u32,
    ) -> f32 {
        let pattern = self.select_pattern(rng, chunk_index);
        let (mut magnitude, mut positive) = match pattern {
            Pattern::Zigzag => {
                let phase = (chunk_index as f32) * 0.6 + current_y * 0.01;
                (rng.gen_range(self.h_min..=self.h_max), phase.sin() >= 0.0)
            }
            Pattern::Random => {
                let span = self.random_pattern_fraction * self.h_max;
                (rng.gen_range(0.0..=span.max(0.0)), rng.gen::<bool>())
            }
            Pattern::CloseSequence => {
                let upper = (self.h_min * self.close_sequence_stretch).min(self.h_max);
                (rng.gen_range(self.h_min..=upper.max(self.h_min)), rng.gen::<bool>())
            }
        };

        // Floor and ceiling: the jump must be neither trivial nor impossible
        magnitude = magnitude.clamp(self.h_min, self.h_max);

        // Wall-bounce: one offset away from the edge we last clamped against
        if let Some(side) = self.edge_bias.take() {
            positive = match side {
                EdgeSide::Left => true,
                EdgeSide::Right => false,
            };
        }

        let mut offset = if positive { magnitude } else { -magnitude };

        // Flip toward the interior when the drawn sign would leave the world
        // and the flipped sign would not
        let lo = self.edge_margin;
        let hi = self.world_width - self.edge_margin;
        let candidate = previous_x + offset;
        if !(lo..=hi).contains(&candidate) && (lo..=hi).contains(&(previous_x - offset)) {
            offset = -offset;
        }

        offset
    }

    /// Records that a candidate was clamped against a world edge.
    ///
    /// The next horizontal offset will point away from that edge.
    pub fn note_edge_clamp(&mut self, side: EdgeSide) {
        self.edge_bias = Some(side);
    }

    /// Chooses the pattern for this draw.
    ///
    /// Each chunk has a preferred pattern (cycling with the chunk index)
    /// chosen with high probability; the remainder is uniform, so runs
    /// vary without a hard three-chunk cycle.
    fn select_pattern(&self, rng: &mut impl Rng, chunk_index: u32) -> Pattern {
        let preferred = Pattern::ALL[(chunk_index % 3) as usize];
        if rng.gen::<f32>() < self.preferred_pattern_bias {
            preferred
        } else {
            Pattern::ALL[rng.gen_range(0..3)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn policy() -> ReachabilityPolicy {
        ReachabilityPolicy::new(&LevelConfig::default())
    }

    #[test]
    fn test_vertical_gap_stays_in_band() {
        let policy = policy();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let gap = policy.next_vertical_gap(&mut rng);
            assert!(gap >= 80.0, "gap {gap} below v_min");
            assert!(gap <= 140.0, "gap {gap} above v_max");
        }
    }

    #[test]
    fn test_stepping_stones_actually_occur() {
        let policy = policy();
        let mut rng = StdRng::seed_from_u64(7);
        let stepping_max = LevelConfig::default().stepping_stone_max();

        let small_gaps = (0..10_000)
            .filter(|_| policy.next_vertical_gap(&mut rng) <= stepping_max)
            .count();

        // stepping_stone_chance is 0.2, plus normal-band draws that land low;
        // anything clearly above zero proves the band is exercised
        assert!(small_gaps > 500, "only {small_gaps} stepping-stone gaps in 10k");
    }

    #[test]
    fn test_horizontal_offset_stays_in_band() {
        let mut policy = policy();
        let mut rng = StdRng::seed_from_u64(42);

        for chunk_index in 0..50 {
            for step in 0..200 {
                let y = 668.0 - step as f32 * 100.0;
                let offset = policy.next_horizontal_offset(&mut rng, 512.0, y, chunk_index);
                let magnitude = offset.abs();
                assert!(magnitude >= 60.0, "offset {offset} below h_min");
                assert!(magnitude <= 120.0, "offset {offset} above h_max");
            }
        }
    }

    #[test]
    fn test_wall_bounce_bias_points_away_from_edge() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let mut policy = policy();
            policy.note_edge_clamp(EdgeSide::Left);
            let offset = policy.next_horizontal_offset(&mut rng, 512.0, 400.0, 0);
            assert!(offset > 0.0, "left clamp must push right, got {offset}");

            policy.note_edge_clamp(EdgeSide::Right);
            let offset = policy.next_horizontal_offset(&mut rng, 512.0, 400.0, 0);
            assert!(offset < 0.0, "right clamp must push left, got {offset}");
        }
    }

    #[test]
    fn test_edge_bias_clears_after_one_draw() {
        let mut policy = policy();
        let mut rng = StdRng::seed_from_u64(42);

        policy.note_edge_clamp(EdgeSide::Left);
        let _ = policy.next_horizontal_offset(&mut rng, 512.0, 400.0, 0);
        assert!(policy.edge_bias.is_none());
    }

    #[test]
    fn test_interior_flip_near_edges() {
        let mut policy = policy();
        let mut rng = StdRng::seed_from_u64(42);

        // Anchor hugging the left margin: every draw must point inward,
        // since the outward candidate always leaves [margin, width-margin]
        for _ in 0..500 {
            let offset = policy.next_horizontal_offset(&mut rng, 60.0, 400.0, 1);
            assert!(offset > 0.0, "offset {offset} points off the left edge");
        }
    }

    #[test]
    fn test_policy_never_fails_on_garbage_y() {
        let mut policy = policy();
        let mut rng = StdRng::seed_from_u64(42);

        // NaN y degrades the zigzag phase, never the contract
        let offset = policy.next_horizontal_offset(&mut rng, 512.0, f32::NAN, 0);
        assert!(offset.abs() >= 60.0);
        assert!(offset.abs() <= 120.0);
    }
}
