//! Preset system definitions.
//!
//! Orbital speeds are circular-orbit values `sqrt(GM/r)` around the
//! dominant mass, all orbits counter-clockwise in the ecliptic (xy) plane.

use crate::atmosphere::{Atmosphere, Gas};
use crate::body::{SpectralClass, Variant};
use crate::math::Vector3;
use crate::types::{EARTH_MASS, EARTH_RADIUS, SOLAR_MASS, SOLAR_RADIUS};

use super::{BodyDescriptor, SystemPreset};

/// All available presets.
pub static PRESETS: &[&SystemPreset] = &[
    &INNER_SOLAR_SYSTEM,
    &SUN_EARTH_MOON,
    &BINARY_STAR,
    &COLLISION_COURSE,
];

const SUN: BodyDescriptor = BodyDescriptor::star(
    "Sun",
    SpectralClass::G,
    SOLAR_RADIUS,
    SOLAR_MASS,
    Vector3::ZERO,
    Vector3::ZERO,
);

const EARTH_AIR: Atmosphere = Atmosphere::new(Gas::EarthAir, 101_325.0, 288.0);

/// Sun and the four terrestrial planets, a quarter turn apart.
pub static INNER_SOLAR_SYSTEM: SystemPreset = SystemPreset {
    id: "inner_solar_system",
    name: "Inner Solar System",
    description: "The Sun with Mercury, Venus, Earth and Mars on circular orbits.",
    bodies: &[
        SUN,
        BodyDescriptor::rocky(
            "Mercury",
            2.4397e6,
            3.3011e23,
            Vector3::new(5.791e10, 0.0, 0.0),
            Vector3::new(0.0, 47_870.0, 0.0),
            Atmosphere::vacuum(100.0),
            100.0,
        ),
        BodyDescriptor::rocky(
            "Venus",
            6.0518e6,
            4.8675e24,
            Vector3::new(0.0, 1.0821e11, 0.0),
            Vector3::new(-35_020.0, 0.0, 0.0),
            Atmosphere::new(Gas::CarbonDioxide, 9.2e6, 737.0),
            40.0,
        ),
        BodyDescriptor::rocky(
            "Earth",
            EARTH_RADIUS,
            EARTH_MASS,
            Vector3::new(-1.496e11, 0.0, 0.0),
            Vector3::new(0.0, -29_780.0, 0.0),
            EARTH_AIR,
            40.0,
        ),
        BodyDescriptor::rocky(
            "Mars",
            3.3895e6,
            6.4171e23,
            Vector3::new(0.0, -2.2794e11, 0.0),
            Vector3::new(24_130.0, 0.0, 0.0),
            Atmosphere::new(Gas::CarbonDioxide, 610.0, 210.0),
            40.0,
        ),
    ],
};

/// Sun, Earth and Moon. The Moon sits outside Earth along the x axis and
/// adds its 1.022 km/s orbital speed on top of Earth's.
pub static SUN_EARTH_MOON: SystemPreset = SystemPreset {
    id: "sun_earth_moon",
    name: "Sun, Earth and Moon",
    description: "Earth and its Moon orbiting the Sun.",
    bodies: &[
        SUN,
        BodyDescriptor::rocky(
            "Earth",
            EARTH_RADIUS,
            EARTH_MASS,
            Vector3::new(1.496e11, 0.0, 0.0),
            Vector3::new(0.0, 29_780.0, 0.0),
            EARTH_AIR,
            40.0,
        ),
        BodyDescriptor::rocky(
            "Moon",
            1.7374e6,
            7.342e22,
            Vector3::new(1.496e11 + 3.844e8, 0.0, 0.0),
            Vector3::new(0.0, 29_780.0 + 1_022.0, 0.0),
            Atmosphere::vacuum(40.0),
            40.0,
        ),
    ],
};

/// A G/M binary 0.2 AU apart with a circumbinary rocky planet at 2 AU.
///
/// Star speeds split the relative orbital speed (81.57 km/s) in inverse
/// proportion to mass about the common barycenter at the origin.
pub static BINARY_STAR: SystemPreset = SystemPreset {
    id: "binary_star",
    name: "Binary Star",
    description: "Two stars circling their barycenter with a planet orbiting both.",
    bodies: &[
        BodyDescriptor::star(
            "Primary",
            SpectralClass::G,
            SOLAR_RADIUS,
            SOLAR_MASS,
            Vector3::new(-9.973e9, 0.0, 0.0),
            Vector3::new(0.0, -27_190.0, 0.0),
        ),
        BodyDescriptor::star(
            "Secondary",
            SpectralClass::M,
            0.4 * SOLAR_RADIUS,
            0.5 * SOLAR_MASS,
            Vector3::new(1.9947e10, 0.0, 0.0),
            Vector3::new(0.0, 54_380.0, 0.0),
        ),
        BodyDescriptor::rocky(
            "Circumbinary",
            7.0e6,
            7.5e24,
            Vector3::new(0.0, 2.992e11, 0.0),
            Vector3::new(-25_795.0, 0.0, 0.0),
            Atmosphere::new(Gas::Nitrogen, 150_000.0, 250.0),
            40.0,
        ),
        BodyDescriptor::body(
            "Wanderer",
            Variant::Asteroid,
            5.0e4,
            1.0e15,
            Vector3::new(0.0, -4.5e11, 0.0),
            Vector3::new(21_000.0, 0.0, 0.0),
        ),
    ],
};

/// A Mars-sized impactor closing on a young Earth at 4 km/s.
pub static COLLISION_COURSE: SystemPreset = SystemPreset {
    id: "collision_course",
    name: "Giant Impact",
    description: "Theia on a head-on course with the proto-Earth.",
    bodies: &[
        SUN,
        BodyDescriptor::rocky(
            "Proto-Earth",
            6.2e6,
            5.4e24,
            Vector3::new(1.496e11, 0.0, 0.0),
            Vector3::new(0.0, 29_780.0, 0.0),
            Atmosphere::new(Gas::CarbonDioxide, 5.0e6, 500.0),
            300.0,
        ),
        BodyDescriptor::rocky(
            "Theia",
            3.39e6,
            6.4e23,
            Vector3::new(1.496e11 + 5.0e7, 0.0, 0.0),
            Vector3::new(-4_000.0, 29_780.0, 0.0),
            Atmosphere::vacuum(200.0),
            200.0,
        ),
        BodyDescriptor::body(
            "Jupiter",
            Variant::GassyPlanet,
            6.9911e7,
            1.8982e27,
            Vector3::new(-7.785e11, 0.0, 0.0),
            Vector3::new(0.0, -13_060.0, 0.0),
        ),
    ],
};
