//! Placement of new bodies on circular orbits.
//!
//! Used when adding a body at runtime next to an existing one: the body is
//! put at `distance` from the primary, `phase` radians around the orbit and
//! tilted `inclination` radians out of the primary's xy plane, moving at
//! circular-orbit speed relative to the primary.

use crate::body::Body;
use crate::math::{MathError, Quaternion, Vector3};

/// Where on a circular orbit to place a body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitPlacement {
    /// Orbit radius measured from the primary's center (m)
    pub distance: f64,
    /// Angle along the orbit from the +x axis (rad)
    pub phase: f64,
    /// Tilt of the orbital plane about the x axis (rad)
    pub inclination: f64,
}

impl OrbitPlacement {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            ..Default::default()
        }
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_inclination(mut self, inclination: f64) -> Self {
        self.inclination = inclination;
        self
    }

    /// Rotation taking the reference orbit (in the xy plane, starting on +x)
    /// to this placement: turn by `phase` about z, then tilt about x.
    pub fn rotation(&self) -> Result<Quaternion, MathError> {
        let along = Quaternion::from_axis_angle(self.phase, Vector3::Z)?;
        let tilt = Quaternion::from_axis_angle(self.inclination, Vector3::X)?;
        Ok(along.then(tilt))
    }
}

/// Circular-orbit speed for two masses `distance` apart.
pub fn circular_speed(primary_mass: f64, satellite_mass: f64, distance: f64, g: f64) -> f64 {
    (g * (primary_mass + satellite_mass) / distance).sqrt()
}

/// Position and velocity of a body of `mass` on a circular orbit around
/// `primary`.
///
/// The speed is the two-body circular speed relative to the primary, so
/// the primary's own velocity is added on top.
///
/// # Arguments
/// * `primary` - Body to orbit
/// * `mass` - Mass of the new body (kg)
/// * `placement` - Orbit radius, phase and inclination
/// * `g` - Gravitational constant
///
/// # Returns
/// `(position, velocity)` in meters and m/s, or `DegenerateVector` for a
/// non-positive distance
pub fn circular_orbit_state(
    primary: &Body,
    mass: f64,
    placement: OrbitPlacement,
    g: f64,
) -> Result<(Vector3, Vector3), MathError> {
    if placement.distance.is_nan() || placement.distance <= 0.0 {
        return Err(MathError::DegenerateVector);
    }

    let speed = circular_speed(primary.mass(), mass, placement.distance, g);
    let q = placement.rotation()?;
    let offset = q.rotate(Vector3::X * placement.distance)?;
    let relative_velocity = q.rotate(Vector3::Y * speed)?;

    Ok((
        primary.position() + offset,
        primary.velocity() + relative_velocity,
    ))
}
