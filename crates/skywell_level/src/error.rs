//! # Level Error Types
//!
//! Two distinct families live here, and they propagate very differently:
//!
//! - [`LevelError`]: the only errors that ever reach a caller. Config
//!   loading and validation happen once at startup; a bad config is fatal
//!   to construction, never to a running engine.
//! - [`CommitRejection`]: soft, per-candidate failures inside the
//!   generation loop. A rejection is logged and the slot is skipped; the
//!   generator moves on. Nothing in the per-tick path returns an error.

use thiserror::Error;

use crate::platform::PlatformId;

/// Errors that can occur when constructing or configuring the level engine.
#[derive(Error, Debug)]
pub enum LevelError {
    /// Invalid configuration value or combination.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed as TOML.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for level engine construction and configuration.
pub type LevelResult<T> = Result<T, LevelError>;

/// Soft rejection of a platform candidate at the store boundary.
///
/// Never fatal: the chunk generator skips the slot and keeps walking,
/// accepting a sparser chunk over a retry loop.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CommitRejection {
    /// Non-finite coordinates, or a width below the minimum visible width.
    #[error("invalid geometry: center=({x}, {y}), width={width}")]
    InvalidGeometry {
        /// Candidate center x.
        x: f32,
        /// Candidate center y.
        y: f32,
        /// Candidate width.
        width: f32,
    },

    /// Candidate AABB intersects a live platform.
    #[error("candidate overlaps live platform {existing:?}")]
    Overlap {
        /// The live platform the candidate collided with.
        existing: PlatformId,
    },
}
