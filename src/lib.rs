//! Orbitsim - N-body Gravity Simulator
//!
//! A library crate providing a deterministic N-body engine with collision
//! merging and a pluggable planetary habitability model, plus a Bevy
//! plugin that drives it on a fixed schedule.

pub mod atmosphere;
pub mod body;
pub mod catalog;
pub mod math;
pub mod orbit;
pub mod physics;
pub mod plugin;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;
