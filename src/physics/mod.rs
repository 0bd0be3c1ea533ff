//! Physics building blocks used by the simulation engine.
//!
//! - `gravity`: pairwise Newtonian forces and potential energy
//! - `integrator`: semi-implicit Euler stepping
//! - `collision`: overlap detection and merge clustering

pub mod collision;
mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use collision::{CollisionRule, MergeGrouping, detect_collisions, group_clusters};
pub use gravity::{compute_forces, gravitational_force, potential_energy};
pub use integrator::{KinematicState, semi_implicit_euler};
