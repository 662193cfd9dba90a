//! # SKYWELL - The Climbing Game
//!
//! Game glue around the level generation core. The real client plugs
//! rendering, player physics, and decoration subsystems into
//! [`skywell_level::LevelEngine`]; this crate carries the pieces that
//! drive the engine without them, chiefly the headless climb simulation
//! used by the `skywell_sim` binary.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod sim;

pub use sim::{ClimbSim, SimConfig, SimReport};
