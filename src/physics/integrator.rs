//! Time integration.
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked by the force
//! first, then the position drifts with the *new* velocity. This keeps
//! orbits bounded far better than explicit Euler at the same cost, although
//! energy still oscillates and is not exactly conserved.

use crate::math::Vector3;

/// Position and velocity of one body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicState {
    /// Position (m)
    pub position: Vector3,
    /// Velocity (m/s)
    pub velocity: Vector3,
}

impl KinematicState {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }
}

/// Advance one body by `dt` seconds under a constant `force`.
///
/// `dt` may be negative to integrate backward.
#[inline]
pub fn semi_implicit_euler(state: KinematicState, force: Vector3, mass: f64, dt: f64) -> KinematicState {
    let velocity = state.velocity + force / mass * dt;
    let position = state.position + velocity * dt;
    KinematicState { position, velocity }
}
