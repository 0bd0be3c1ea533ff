//! Catalog of predefined planetary systems.
//!
//! Each [`SystemPreset`] is an ordered, immutable list of
//! [`BodyDescriptor`]s. The table lives in static memory for the life of the
//! process; engines deep-copy from it when they are created or reset and
//! never write back.

pub mod presets;

use std::borrow::Cow;

use crate::atmosphere::Atmosphere;
use crate::body::{Body, SpectralClass, Variant};
use crate::math::{MathError, Vector3};
use crate::orbit::{OrbitPlacement, circular_orbit_state};

pub use presets::PRESETS;

/// Initial description of a body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub name: Cow<'static, str>,
    /// Radius (m)
    pub radius: f64,
    /// Mass (kg)
    pub mass: f64,
    /// Initial position (m)
    pub position: Vector3,
    /// Initial velocity (m/s)
    pub velocity: Vector3,
    pub variant: Variant,
    /// Stars only. Defaults to G.
    pub spectral_class: Option<SpectralClass>,
    /// Rocky planets only. Defaults to vacuum.
    pub atmosphere: Option<Atmosphere>,
    /// Rocky planets only (K).
    pub base_temperature: Option<f64>,
}

impl BodyDescriptor {
    /// Descriptor with no variant-specific extras.
    pub const fn body(
        name: &'static str,
        variant: Variant,
        radius: f64,
        mass: f64,
        position: Vector3,
        velocity: Vector3,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            radius,
            mass,
            position,
            velocity,
            variant,
            spectral_class: None,
            atmosphere: None,
            base_temperature: None,
        }
    }

    pub const fn star(
        name: &'static str,
        spectral_class: SpectralClass,
        radius: f64,
        mass: f64,
        position: Vector3,
        velocity: Vector3,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            radius,
            mass,
            position,
            velocity,
            variant: Variant::Star,
            spectral_class: Some(spectral_class),
            atmosphere: None,
            base_temperature: None,
        }
    }

    pub const fn rocky(
        name: &'static str,
        radius: f64,
        mass: f64,
        position: Vector3,
        velocity: Vector3,
        atmosphere: Atmosphere,
        base_temperature: f64,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            radius,
            mass,
            position,
            velocity,
            variant: Variant::RockyPlanet,
            spectral_class: None,
            atmosphere: Some(atmosphere),
            base_temperature: Some(base_temperature),
        }
    }

    /// Rename, e.g. for bodies added at runtime.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Place this body on a circular orbit around `primary`.
    ///
    /// Overwrites position and velocity; `g` is the gravitational constant
    /// the orbit speed is computed with.
    pub fn in_orbit(
        mut self,
        primary: &Body,
        placement: OrbitPlacement,
        g: f64,
    ) -> Result<Self, MathError> {
        let (position, velocity) = circular_orbit_state(primary, self.mass, placement, g)?;
        self.position = position;
        self.velocity = velocity;
        Ok(self)
    }
}

/// A named, immutable system.
#[derive(Debug)]
pub struct SystemPreset {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub description: &'static str,
    /// Bodies in engine order
    pub bodies: &'static [BodyDescriptor],
}

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static SystemPreset> {
    PRESETS.iter().copied().find(|p| p.id == id)
}
