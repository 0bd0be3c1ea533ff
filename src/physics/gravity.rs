//! Pairwise Newtonian gravity.
//!
//! Forces are accumulated by brute force over every unordered pair, which is
//! O(n²) per step. That is fine for the tens of bodies a preset holds; a
//! spatial tree (Barnes–Hut or a grid) would be needed well before thousands.

use bevy::log::debug;

use crate::body::Body;
use crate::math::Vector3;

/// Force on a body at `pos` with mass `mass` exerted by `other_mass` at
/// `other_pos`: `G·m₁·m₂/r² · r̂`, with `r̂` pointing toward the other body.
///
/// # Arguments
/// * `pos`, `mass` - Position (m) and mass (kg) of the body feeling the force
/// * `other_pos`, `other_mass` - Position and mass of the attracting body
/// * `g` - Gravitational constant
/// * `min_separation` - Distance (m) below which the pair is skipped
///
/// # Returns
/// Force vector in newtons, or `None` when the centers are closer than
/// `min_separation`.
#[inline]
pub fn gravitational_force(
    pos: Vector3,
    mass: f64,
    other_pos: Vector3,
    other_mass: f64,
    g: f64,
    min_separation: f64,
) -> Option<Vector3> {
    let delta = other_pos - pos;
    let r_squared = delta.length_squared();
    let r = r_squared.sqrt();

    if r < min_separation || r == 0.0 {
        return None;
    }

    // delta / r is the unit vector, so fold it into one division
    Some(delta * (g * mass * other_mass / (r_squared * r)))
}

/// Net gravitational force on every body, in collection order.
///
/// Each pair is evaluated once and applied to both bodies with opposite
/// sign, so the forces always sum to zero.
///
/// # Arguments
/// * `bodies` - Bodies in engine order
/// * `g` - Gravitational constant
/// * `min_separation` - Pairs closer than this (m) exert no force
///
/// # Returns
/// One force vector (N) per body, indexed like `bodies`
pub fn compute_forces(bodies: &[Body], g: f64, min_separation: f64) -> Vec<Vector3> {
    let mut forces = vec![Vector3::ZERO; bodies.len()];

    for (i, a) in bodies.iter().enumerate() {
        for (j, b) in bodies.iter().enumerate().skip(i + 1) {
            match gravitational_force(
                a.position(),
                a.mass(),
                b.position(),
                b.mass(),
                g,
                min_separation,
            ) {
                Some(f) => {
                    forces[i] += f;
                    forces[j] -= f;
                }
                None => debug!(
                    "Skipping gravity between {} and {}: centers closer than {} m",
                    a.name(),
                    b.name(),
                    min_separation
                ),
            }
        }
    }

    forces
}

/// Total gravitational potential energy of the collection (J).
///
/// Pairs skipped by the force calculation are skipped here too.
pub fn potential_energy(bodies: &[Body], g: f64, min_separation: f64) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let r = a.position().distance(b.position());
            if r >= min_separation && r > 0.0 {
                energy -= g * a.mass() * b.mass() / r;
            }
        }
    }
    energy
}
