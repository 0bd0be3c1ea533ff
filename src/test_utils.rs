//! Test utilities for simulation tests.
//!
//! Provides fixtures for common bodies and assertions for verifying
//! physical invariants like separation and energy drift.

use crate::body::Body;
use crate::catalog::BodyDescriptor;
use crate::math::Vector3;

/// Fixtures for creating test bodies.
pub mod fixtures {
    use super::*;
    use crate::atmosphere::{Atmosphere, Gas};
    use crate::body::{SpectralClass, Variant};
    use crate::types::{AU_TO_METERS, EARTH_MASS, EARTH_RADIUS, SOLAR_MASS, SOLAR_RADIUS};

    /// G-class Sun at rest at the origin.
    pub fn sun() -> Body {
        Body::from_descriptor(&BodyDescriptor::star(
            "Sun",
            SpectralClass::G,
            SOLAR_RADIUS,
            SOLAR_MASS,
            Vector3::ZERO,
            Vector3::ZERO,
        ))
        .unwrap()
    }

    /// Earth at 1 AU on +x, moving +y, with an Earth-like atmosphere.
    pub fn earth() -> Body {
        Body::from_descriptor(&BodyDescriptor::rocky(
            "Earth",
            EARTH_RADIUS,
            EARTH_MASS,
            Vector3::new(AU_TO_METERS, 0.0, 0.0),
            Vector3::new(0.0, 29_780.0, 0.0),
            Atmosphere::new(Gas::EarthAir, 101_325.0, 288.0),
            40.0,
        ))
        .unwrap()
    }

    /// Moon just outside Earth's orbit along +x.
    pub fn moon() -> Body {
        Body::from_descriptor(&BodyDescriptor::rocky(
            "Moon",
            1.7374e6,
            7.342e22,
            Vector3::new(AU_TO_METERS + 3.844e8, 0.0, 0.0),
            Vector3::new(0.0, 30_802.0, 0.0),
            Atmosphere::vacuum(40.0),
            40.0,
        ))
        .unwrap()
    }

    /// Unit-mass asteroid of the given radius at rest at `position`.
    pub fn body_at(name: &'static str, radius: f64, position: Vector3) -> Body {
        Body::from_descriptor(&BodyDescriptor::body(
            name,
            Variant::Asteroid,
            radius,
            1.0,
            position,
            Vector3::ZERO,
        ))
        .unwrap()
    }

    /// Asteroid with explicit mass, radius and kinematics.
    pub fn asteroid(
        name: &'static str,
        mass: f64,
        radius: f64,
        position: Vector3,
        velocity: Vector3,
    ) -> Body {
        Body::from_descriptor(&BodyDescriptor::body(
            name,
            Variant::Asteroid,
            radius,
            mass,
            position,
            velocity,
        ))
        .unwrap()
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Relative change between two values, falling back to absolute change
    /// when the initial value is (near) zero.
    pub fn relative_drift(initial: f64, current: f64) -> f64 {
        if initial.abs() > 1e-10 {
            ((current - initial) / initial).abs()
        } else {
            (current - initial).abs()
        }
    }

    /// Assert two vectors agree component-wise within `tolerance`.
    ///
    /// # Panics
    /// Panics if any component differs by more than `tolerance`.
    pub fn assert_vec_close(actual: Vector3, expected: Vector3, tolerance: f64) {
        let diff = actual - expected;
        assert!(
            diff.x.abs() <= tolerance && diff.y.abs() <= tolerance && diff.z.abs() <= tolerance,
            "vectors differ: actual={actual:?}, expected={expected:?}, tolerance={tolerance:e}"
        );
    }
}
