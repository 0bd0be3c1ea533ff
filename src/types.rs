//! Physical constants and unit conversions (SI units).

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Stefan–Boltzmann constant (W·m⁻²·K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Molar gas constant (J·mol⁻¹·K⁻¹)
pub const GAS_CONSTANT: f64 = 8.314462618;

/// Standard atmosphere in pascals
pub const STANDARD_ATMOSPHERE: f64 = 101_325.0;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Solar mass (kg)
pub const SOLAR_MASS: f64 = 1.98847e30;

/// Solar radius (m)
pub const SOLAR_RADIUS: f64 = 6.957e8;

/// Earth mass (kg)
pub const EARTH_MASS: f64 = 5.9722e24;

/// Earth radius (m)
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Volume of a sphere of radius `r`.
#[inline]
pub fn sphere_volume(r: f64) -> f64 {
    4.0 / 3.0 * std::f64::consts::PI * r * r * r
}

/// Radius of a sphere with volume `v`.
#[inline]
pub fn sphere_radius(v: f64) -> f64 {
    (v * 3.0 / (4.0 * std::f64::consts::PI)).cbrt()
}
