//! # SKYWELL Shared Types
//!
//! Math and geometry shared between the level core and its collaborators
//! (physics, rendering, the simulation driver).
//!
//! ## Rules
//!
//! 1. **Pure**: every function here is side-effect free
//! 2. **Pod**: types are `repr(C)` and byte-castable for collaborators
//!    that upload geometry verbatim
//! 3. **No gameplay**: tuning constants and entity state live elsewhere

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod math;

pub use math::{clamp_to_world, Aabb, Vec2};
