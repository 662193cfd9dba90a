//! # SKYWELL Level Generation
//!
//! Infinite, chunk-based vertical level generation for a climbing game:
//! an unbounded sequence of traversable platforms above a rising void.
//!
//! ## Guarantees
//!
//! 1. **Reachable**: every platform is jumpable from the previous one,
//!    by construction from configured jump-arc bands
//! 2. **Non-overlapping**: no two live platforms' AABBs ever intersect
//! 3. **Paced**: generation stays ahead of the viewport, one chunk per
//!    tick at most
//! 4. **Bounded**: geometry behind the destruction threshold is released,
//!    decorations included
//!
//! ## Core Components
//!
//! - `ReachabilityPolicy`: jump constants -> legal vertical/horizontal gaps
//! - `PlatformStore`: the authoritative live collection + chunk records
//! - `ChunkGenerator`: walk a span, place, validate, commit
//! - `GenerationScheduler` / `DestructionManager`: frontier and void watchers
//! - `LevelEngine`: the per-tick facade the host game drives
//!
//! ## Example
//!
//! ```rust,ignore
//! use skywell_level::{LevelConfig, LevelEngine};
//!
//! let mut engine = LevelEngine::new(LevelConfig::default())?;
//!
//! // Once per frame, with the current viewport and void readings:
//! engine.update(viewport_y, hazard_y);
//!
//! for (id, aabb, lit) in engine.list_live_platforms() {
//!     // feed physics / rendering
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod decoration;
pub mod destruction;
pub mod engine;
pub mod error;
pub mod generator;
pub mod platform;
pub mod policy;
pub mod scheduler;
pub mod store;

pub use config::LevelConfig;
pub use decoration::{DecorationHook, NullDecorationHook};
pub use destruction::DestructionManager;
pub use engine::{LevelEngine, LevelStats};
pub use error::{CommitRejection, LevelError, LevelResult};
pub use generator::{ChunkGenerator, GenerationCursor};
pub use platform::{
    Chunk, ChunkId, ChunkTheme, DecorationHandle, Platform, PlatformBlueprint, PlatformId,
    PlatformView,
};
pub use policy::{EdgeSide, ReachabilityPolicy};
pub use scheduler::GenerationScheduler;
pub use store::PlatformStore;
