//! Bodies taking part in the simulation.
//!
//! A [`Body`] is shared physical state (mass, radius, position, velocity)
//! plus a [`BodyKind`] payload for the variant-specific parts. Bodies are
//! only ever built from a validated [`BodyDescriptor`] or by merging other
//! bodies, so the positive-mass/positive-radius invariant always holds.

use std::f64::consts::PI;

use crate::atmosphere::{Atmosphere, PlanetConditions};
use crate::catalog::BodyDescriptor;
use crate::math::Vector3;
use crate::types::{G, STEFAN_BOLTZMANN, sphere_radius, sphere_volume};

/// Surface temperature of a rocky planet that receives no starlight (K).
///
/// Roughly the cosmic microwave background.
pub const DEFAULT_BASE_TEMPERATURE: f64 = 2.725;

/// Errors raised while building or merging bodies.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("invalid configuration for body '{name}': {reason}")]
    InvalidBodyConfiguration { name: String, reason: &'static str },

    #[error("invalid atmosphere: {0}")]
    InvalidAtmosphere(&'static str),

    #[error("a merge needs at least two bodies, got {0}")]
    EmptyMerge(usize),
}

/// Variant tag of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Star,
    RockyPlanet,
    GassyPlanet,
    Asteroid,
    /// Result of a merge. Terminal: a crashed planet never becomes anything else.
    CrashedPlanet,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Star => "star",
            Variant::RockyPlanet => "rocky planet",
            Variant::GassyPlanet => "gassy planet",
            Variant::Asteroid => "asteroid",
            Variant::CrashedPlanet => "crashed planet",
        }
    }
}

/// Harvard spectral class of a star.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    #[default]
    G,
    K,
    M,
}

impl SpectralClass {
    /// Representative photospheric temperature (K).
    pub fn effective_temperature(&self) -> f64 {
        match self {
            SpectralClass::O => 35_000.0,
            SpectralClass::B => 15_000.0,
            SpectralClass::A => 8_500.0,
            SpectralClass::F => 6_500.0,
            SpectralClass::G => 5_778.0,
            SpectralClass::K => 4_500.0,
            SpectralClass::M => 3_200.0,
        }
    }
}

/// Variant-specific payload.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyKind {
    Star {
        spectral_class: SpectralClass,
    },
    RockyPlanet {
        atmosphere: Atmosphere,
        /// Temperature the surface holds without stellar heating (K)
        base_temperature: f64,
    },
    GassyPlanet,
    Asteroid,
    CrashedPlanet,
}

impl BodyKind {
    pub fn variant(&self) -> Variant {
        match self {
            BodyKind::Star { .. } => Variant::Star,
            BodyKind::RockyPlanet { .. } => Variant::RockyPlanet,
            BodyKind::GassyPlanet => Variant::GassyPlanet,
            BodyKind::Asteroid => Variant::Asteroid,
            BodyKind::CrashedPlanet => Variant::CrashedPlanet,
        }
    }
}

/// A live body. Cloning produces a fully independent copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    name: String,
    /// Radius in meters
    radius: f64,
    /// Mass in kilograms
    mass: f64,
    /// Position in meters
    position: Vector3,
    /// Velocity in meters per second
    velocity: Vector3,
    kind: BodyKind,
}

impl Body {
    /// Build a live body from a descriptor.
    ///
    /// Rejects non-positive or non-finite mass and radius, non-finite
    /// kinematics, and extras that do not belong to the descriptor's variant
    /// (an atmosphere on a star, a spectral class on a planet).
    pub fn from_descriptor(desc: &BodyDescriptor) -> Result<Self, BodyError> {
        let invalid = |reason| BodyError::InvalidBodyConfiguration {
            name: desc.name.to_string(),
            reason,
        };

        if !desc.mass.is_finite() || desc.mass <= 0.0 {
            return Err(invalid("mass must be finite and positive"));
        }
        if !desc.radius.is_finite() || desc.radius <= 0.0 {
            return Err(invalid("radius must be finite and positive"));
        }
        if !desc.position.is_finite() || !desc.velocity.is_finite() {
            return Err(invalid("position and velocity must be finite"));
        }
        if desc.spectral_class.is_some() && desc.variant != Variant::Star {
            return Err(invalid("only stars have a spectral class"));
        }
        if desc.variant != Variant::RockyPlanet
            && (desc.atmosphere.is_some() || desc.base_temperature.is_some())
        {
            return Err(invalid("only rocky planets have an atmosphere or base temperature"));
        }

        let kind = match desc.variant {
            Variant::Star => BodyKind::Star {
                spectral_class: desc.spectral_class.unwrap_or_default(),
            },
            Variant::RockyPlanet => {
                let base_temperature = desc.base_temperature.unwrap_or(DEFAULT_BASE_TEMPERATURE);
                if !base_temperature.is_finite() || base_temperature < 0.0 {
                    return Err(invalid("base temperature must be finite and >= 0"));
                }
                let atmosphere = desc
                    .atmosphere
                    .unwrap_or(Atmosphere::vacuum(base_temperature));
                atmosphere.validate()?;
                BodyKind::RockyPlanet {
                    atmosphere,
                    base_temperature,
                }
            }
            Variant::GassyPlanet => BodyKind::GassyPlanet,
            Variant::Asteroid => BodyKind::Asteroid,
            Variant::CrashedPlanet => BodyKind::CrashedPlanet,
        };

        Ok(Self {
            name: desc.name.to_string(),
            radius: desc.radius,
            mass: desc.mass,
            position: desc.position,
            velocity: desc.velocity,
            kind,
        })
    }

    /// Combine colliding bodies into one crashed planet.
    ///
    /// Mass is summed, momentum is conserved, the position is the
    /// mass-weighted centroid and the radius is that of a sphere holding the
    /// summed volumes. The result is always a [`Variant::CrashedPlanet`]
    /// named after the first member; any atmosphere or stellar class is lost.
    pub fn merge(cluster: &[&Body]) -> Result<Body, BodyError> {
        let [first, _, ..] = cluster else {
            return Err(BodyError::EmptyMerge(cluster.len()));
        };

        let mass: f64 = cluster.iter().map(|b| b.mass).sum();
        let momentum: Vector3 = cluster.iter().map(|b| b.momentum()).sum();
        let weighted_position: Vector3 = cluster.iter().map(|b| b.position * b.mass).sum();
        let volume: f64 = cluster.iter().map(|b| b.volume()).sum();

        let name = match first.kind {
            BodyKind::CrashedPlanet => first.name.clone(),
            _ => format!("{} remnant", first.name),
        };

        Ok(Body {
            name,
            radius: sphere_radius(volume),
            mass,
            position: weighted_position / mass,
            velocity: momentum / mass,
            kind: BodyKind::CrashedPlanet,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star { .. })
    }

    pub fn spectral_class(&self) -> Option<SpectralClass> {
        match self.kind {
            BodyKind::Star { spectral_class } => Some(spectral_class),
            _ => None,
        }
    }

    /// Atmosphere of a rocky planet.
    pub fn atmosphere(&self) -> Option<&Atmosphere> {
        match &self.kind {
            BodyKind::RockyPlanet { atmosphere, .. } => Some(atmosphere),
            _ => None,
        }
    }

    /// Inputs for the habitability hook, for rocky planets only.
    pub fn planet_conditions(&self) -> Option<PlanetConditions<'_>> {
        match &self.kind {
            BodyKind::RockyPlanet {
                atmosphere,
                base_temperature,
            } => Some(PlanetConditions {
                body: self,
                atmosphere,
                base_temperature: *base_temperature,
            }),
            _ => None,
        }
    }

    /// Black-body luminosity of a star (W).
    pub fn luminosity(&self) -> Option<f64> {
        let class = self.spectral_class()?;
        let t = class.effective_temperature();
        Some(4.0 * PI * self.radius * self.radius * STEFAN_BOLTZMANN * t.powi(4))
    }

    /// Linear momentum (kg·m/s).
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    /// Kinetic energy (J).
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Volume (m³).
    pub fn volume(&self) -> f64 {
        sphere_volume(self.radius)
    }

    /// Surface gravity (m/s²).
    pub fn surface_gravity(&self) -> f64 {
        G * self.mass / (self.radius * self.radius)
    }

    /// Escape velocity at the surface (m/s).
    pub fn escape_velocity(&self) -> f64 {
        (2.0 * G * self.mass / self.radius).sqrt()
    }

    /// True when mass, radius, position and velocity are all finite.
    pub fn is_finite(&self) -> bool {
        self.mass.is_finite()
            && self.radius.is_finite()
            && self.position.is_finite()
            && self.velocity.is_finite()
    }

    pub(crate) fn set_kinematics(&mut self, position: Vector3, velocity: Vector3) {
        self.position = position;
        self.velocity = velocity;
    }

    /// Replace a rocky planet's atmosphere. Ignored for other variants.
    pub(crate) fn set_atmosphere(&mut self, updated: Atmosphere) {
        if let BodyKind::RockyPlanet { atmosphere, .. } = &mut self.kind {
            *atmosphere = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::Gas;
    use crate::test_utils::fixtures;
    use approx::assert_relative_eq;

    fn rock(name: &'static str, mass: f64, radius: f64, pos: Vector3, vel: Vector3) -> Body {
        Body::from_descriptor(&BodyDescriptor::body(
            name,
            Variant::Asteroid,
            radius,
            mass,
            pos,
            vel,
        ))
        .unwrap()
    }

    #[test]
    fn test_rejects_non_positive_mass_and_radius() {
        for (mass, radius) in [(0.0, 1.0), (-1.0, 1.0), (1.0, 0.0), (1.0, -2.0), (f64::NAN, 1.0)] {
            let desc = BodyDescriptor::body(
                "bad",
                Variant::Asteroid,
                radius,
                mass,
                Vector3::ZERO,
                Vector3::ZERO,
            );
            let err = Body::from_descriptor(&desc).unwrap_err();
            assert!(
                matches!(err, BodyError::InvalidBodyConfiguration { ref name, .. } if name == "bad"),
                "unexpected error {err:?} for mass={mass} radius={radius}"
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_kinematics() {
        let desc = BodyDescriptor::body(
            "drifter",
            Variant::Asteroid,
            1.0,
            1.0,
            Vector3::new(f64::INFINITY, 0.0, 0.0),
            Vector3::ZERO,
        );
        assert!(Body::from_descriptor(&desc).is_err());
    }

    #[test]
    fn test_rejects_extras_on_wrong_variant() {
        let mut desc = BodyDescriptor::body(
            "gas giant",
            Variant::GassyPlanet,
            7.0e7,
            1.9e27,
            Vector3::ZERO,
            Vector3::ZERO,
        );
        desc.atmosphere = Some(Atmosphere::new(Gas::HydrogenHelium, 1.0e5, 165.0));
        assert!(Body::from_descriptor(&desc).is_err());

        let mut desc = BodyDescriptor::body(
            "rock",
            Variant::Asteroid,
            1.0,
            1.0,
            Vector3::ZERO,
            Vector3::ZERO,
        );
        desc.spectral_class = Some(SpectralClass::K);
        assert!(Body::from_descriptor(&desc).is_err());
    }

    #[test]
    fn test_rocky_planet_defaults_to_vacuum() {
        let desc = BodyDescriptor::body(
            "Mercury",
            Variant::RockyPlanet,
            2.4397e6,
            3.3011e23,
            Vector3::ZERO,
            Vector3::ZERO,
        );
        let body = Body::from_descriptor(&desc).unwrap();
        let atmosphere = body.atmosphere().unwrap();
        assert_eq!(atmosphere.gas, Gas::None);
        assert_eq!(atmosphere.temperature, DEFAULT_BASE_TEMPERATURE);
    }

    #[test]
    fn test_invalid_atmosphere_rejected() {
        let mut desc = BodyDescriptor::body(
            "Venus",
            Variant::RockyPlanet,
            6.05e6,
            4.87e24,
            Vector3::ZERO,
            Vector3::ZERO,
        );
        desc.atmosphere = Some(Atmosphere::new(Gas::CarbonDioxide, -5.0, 700.0));
        assert!(matches!(
            Body::from_descriptor(&desc),
            Err(BodyError::InvalidAtmosphere(_))
        ));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = fixtures::earth();
        let mut copy = original.clone();
        copy.set_kinematics(Vector3::new(1.0, 2.0, 3.0), Vector3::ZERO);
        copy.set_atmosphere(Atmosphere::new(Gas::CarbonDioxide, 1.0, 1.0));

        assert_ne!(copy, original);
        assert_eq!(original.atmosphere().unwrap().gas, Gas::EarthAir);
    }

    #[test]
    fn test_merge_conserves_momentum() {
        let a = rock("a", 1.0, 1.0, Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
        let b = rock("b", 3.0, 1.0, Vector3::new(0.5, 0.0, 0.0), Vector3::ZERO);

        let merged = Body::merge(&[&a, &b]).unwrap();
        assert_eq!(merged.velocity(), Vector3::new(0.25, 0.0, 0.0));
        assert_eq!(merged.mass(), 4.0);
    }

    #[test]
    fn test_merge_radius_from_volume() {
        let a = rock("a", 1.0, 1.0, Vector3::ZERO, Vector3::ZERO);
        let b = rock("b", 1.0, 1.0, Vector3::X, Vector3::ZERO);

        let merged = Body::merge(&[&a, &b]).unwrap();
        assert_relative_eq!(merged.radius(), 2f64.cbrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_merge_position_is_mass_weighted_centroid() {
        let a = rock("a", 1.0, 1.0, Vector3::ZERO, Vector3::ZERO);
        let b = rock("b", 3.0, 1.0, Vector3::new(4.0, 0.0, 0.0), Vector3::ZERO);

        let merged = Body::merge(&[&a, &b]).unwrap();
        assert_eq!(merged.position(), Vector3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_merge_discards_variant_payload() {
        let earth = fixtures::earth();
        let moon = fixtures::moon();

        let merged = Body::merge(&[&earth, &moon]).unwrap();
        assert_eq!(merged.variant(), Variant::CrashedPlanet);
        assert!(merged.atmosphere().is_none());
        assert_eq!(merged.name(), "Earth remnant");

        // A crashed planet absorbing more keeps its name
        let again = Body::merge(&[&merged, &moon]).unwrap();
        assert_eq!(again.name(), "Earth remnant");
        assert_eq!(again.variant(), Variant::CrashedPlanet);
    }

    #[test]
    fn test_merge_needs_two_bodies() {
        let a = fixtures::earth();
        assert_eq!(Body::merge(&[&a]), Err(BodyError::EmptyMerge(1)));
        assert_eq!(Body::merge(&[]), Err(BodyError::EmptyMerge(0)));
    }

    #[test]
    fn test_star_luminosity() {
        let sun = fixtures::sun();
        // Nominal solar luminosity 3.828e26 W
        assert_relative_eq!(sun.luminosity().unwrap(), 3.828e26, max_relative = 0.01);
        assert!(fixtures::earth().luminosity().is_none());
    }

    #[test]
    fn test_surface_quantities() {
        let earth = fixtures::earth();
        assert_relative_eq!(earth.surface_gravity(), 9.82, epsilon = 0.02);
        assert_relative_eq!(earth.escape_velocity(), 11_186.0, epsilon = 10.0);
    }
}
