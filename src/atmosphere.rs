//! Planetary atmospheres and the per-step habitability hook.
//!
//! The engine calls a [`HabitabilityModel`] once per step for every rocky
//! planet that has an atmosphere. The model receives the planet, every star
//! in the system and the elapsed time, and returns the planet's new
//! atmosphere. [`RadiativeBalance`] is the default model: a grey-atmosphere
//! energy balance driven by incident stellar flux.

use std::f64::consts::PI;

use crate::body::{Body, BodyError};
use crate::math::Vector3;
use crate::types::{GAS_CONSTANT, STANDARD_ATMOSPHERE, STEFAN_BOLTZMANN};

/// Gas making up the bulk of an atmosphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Gas {
    /// No atmosphere at all.
    #[default]
    None,
    EarthAir,
    CarbonDioxide,
    Nitrogen,
    Methane,
    HydrogenHelium,
    WaterVapor,
}

/// Bulk properties of a gas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasProfile {
    /// Density at 0 °C and 1 atm (kg/m³)
    pub density: f64,
    /// Specific heat capacity at constant pressure (J·kg⁻¹·K⁻¹)
    pub heat_capacity: f64,
    /// Bond albedo of a planet wrapped in this gas
    pub albedo: f64,
    /// Molar mass (kg/mol)
    pub molar_mass: f64,
    /// Infrared optical depth per standard atmosphere of surface pressure
    pub greenhouse_opacity: f64,
}

impl Gas {
    /// Physical profile of the gas.
    ///
    /// Opacities are tuned so Earth air at 1 atm and 1 AU settles near 288 K
    /// and a 92 atm CO2 envelope near 1 AU·0.72 settles near 737 K.
    pub fn profile(&self) -> GasProfile {
        match self {
            // Bare rock: only the albedo matters
            Gas::None => GasProfile {
                density: 0.0,
                heat_capacity: 0.0,
                albedo: 0.12,
                molar_mass: 0.0,
                greenhouse_opacity: 0.0,
            },
            Gas::EarthAir => GasProfile {
                density: 1.2754,
                heat_capacity: 1005.0,
                albedo: 0.30,
                molar_mass: 0.028_97,
                greenhouse_opacity: 0.836,
            },
            Gas::CarbonDioxide => GasProfile {
                density: 1.977,
                heat_capacity: 844.0,
                albedo: 0.75,
                molar_mass: 0.044_01,
                greenhouse_opacity: 1.46,
            },
            Gas::Nitrogen => GasProfile {
                density: 1.2506,
                heat_capacity: 1040.0,
                albedo: 0.25,
                molar_mass: 0.028_013,
                greenhouse_opacity: 0.05,
            },
            Gas::Methane => GasProfile {
                density: 0.717,
                heat_capacity: 2220.0,
                albedo: 0.20,
                molar_mass: 0.016_04,
                greenhouse_opacity: 2.0,
            },
            Gas::HydrogenHelium => GasProfile {
                density: 0.0899,
                heat_capacity: 12_000.0,
                albedo: 0.34,
                molar_mass: 0.002_3,
                greenhouse_opacity: 0.5,
            },
            Gas::WaterVapor => GasProfile {
                density: 0.804,
                heat_capacity: 1996.0,
                albedo: 0.35,
                molar_mass: 0.018_015,
                greenhouse_opacity: 3.0,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gas::None => "none",
            Gas::EarthAir => "earth air",
            Gas::CarbonDioxide => "carbon dioxide",
            Gas::Nitrogen => "nitrogen",
            Gas::Methane => "methane",
            Gas::HydrogenHelium => "hydrogen/helium",
            Gas::WaterVapor => "water vapor",
        }
    }
}

/// Lower edge of the liquid-water window (K)
pub const WATER_FREEZING_POINT: f64 = 273.15;

/// Upper edge of the liquid-water window at 1 atm (K)
pub const WATER_BOILING_POINT: f64 = 373.15;

/// Below this pressure liquid water cannot exist (Pa)
pub const WATER_TRIPLE_POINT_PRESSURE: f64 = 611.657;

/// State of a planet's atmosphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    pub gas: Gas,
    /// Surface pressure (Pa)
    pub pressure: f64,
    /// Surface temperature (K)
    pub temperature: f64,
}

impl Atmosphere {
    pub const fn new(gas: Gas, pressure: f64, temperature: f64) -> Self {
        Self {
            gas,
            pressure,
            temperature,
        }
    }

    /// No gas; the surface sits at `temperature`.
    pub const fn vacuum(temperature: f64) -> Self {
        Self::new(Gas::None, 0.0, temperature)
    }

    pub fn has_gas(&self) -> bool {
        self.gas != Gas::None
    }

    /// Check pressure and temperature are finite and non-negative.
    pub fn validate(&self) -> Result<(), BodyError> {
        if !self.pressure.is_finite() || self.pressure < 0.0 {
            return Err(BodyError::InvalidAtmosphere("pressure must be finite and >= 0"));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(BodyError::InvalidAtmosphere("temperature must be finite and >= 0"));
        }
        if self.gas == Gas::None && self.pressure > 0.0 {
            return Err(BodyError::InvalidAtmosphere("vacuum cannot have pressure"));
        }
        Ok(())
    }

    /// Whether liquid water could exist on the surface.
    pub fn is_habitable(&self) -> bool {
        self.has_gas()
            && self.pressure >= WATER_TRIPLE_POINT_PRESSURE
            && (WATER_FREEZING_POINT..=WATER_BOILING_POINT).contains(&self.temperature)
    }
}

/// What the habitability hook sees of a rocky planet.
#[derive(Clone, Copy, Debug)]
pub struct PlanetConditions<'a> {
    pub body: &'a Body,
    pub atmosphere: &'a Atmosphere,
    /// Temperature the surface holds without any stellar heating (K)
    pub base_temperature: f64,
}

/// Extension point run once per step for each rocky planet with gas.
///
/// Implementations must be pure functions of their inputs: they return the
/// replacement atmosphere and never touch engine state. `dt` is in seconds
/// and may be negative when the simulation runs backward.
pub trait HabitabilityModel: Send + Sync {
    fn update_habitability(
        &self,
        planet: PlanetConditions<'_>,
        suns: &[&Body],
        dt: f64,
    ) -> Atmosphere;
}

/// Total stellar flux arriving at `position` (W/m²).
///
/// Each star radiates as a black body of its radius and spectral-class
/// effective temperature. A star sitting exactly at `position` is ignored.
pub fn incident_flux(position: Vector3, suns: &[&Body]) -> f64 {
    suns.iter()
        .filter_map(|sun| {
            let luminosity = sun.luminosity()?;
            let d2 = (sun.position() - position).length_squared();
            (d2 > 0.0).then(|| luminosity / (4.0 * PI * d2))
        })
        .sum()
}

/// Radiative-equilibrium temperature for absorbed flux `flux·(1-albedo)`.
pub fn equilibrium_temperature(flux: f64, albedo: f64) -> f64 {
    (flux * (1.0 - albedo) / (4.0 * STEFAN_BOLTZMANN)).max(0.0).powf(0.25)
}

/// Jeans parameter below which a gas is considered to be escaping
pub const JEANS_ESCAPE_LIMIT: f64 = 6.0;

/// E-folding time of an escaping atmosphere per unit Jeans parameter (s)
pub const ESCAPE_TIMESCALE: f64 = 1.0e8;

/// Grey-atmosphere radiative balance.
///
/// The surface temperature relaxes toward
/// `T_eq · (1 + 0.75 τ)^¼`, where `τ` scales with surface pressure, with the
/// column heat capacity `cₚ P / g` setting the relaxation time. Pressure is
/// hydrostatic and only changes when thermal escape (low Jeans parameter)
/// bleeds the gas away. Thermal history is not rewound for negative `dt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadiativeBalance;

impl RadiativeBalance {
    /// Surface temperature the atmosphere is heading toward.
    pub fn target_temperature(&self, planet: &PlanetConditions<'_>, flux: f64) -> f64 {
        let profile = planet.atmosphere.gas.profile();
        let tau = profile.greenhouse_opacity * planet.atmosphere.pressure / STANDARD_ATMOSPHERE;
        let t_eq = equilibrium_temperature(flux, profile.albedo);
        (t_eq * (1.0 + 0.75 * tau).powf(0.25)).max(planet.base_temperature)
    }
}

impl HabitabilityModel for RadiativeBalance {
    fn update_habitability(
        &self,
        planet: PlanetConditions<'_>,
        suns: &[&Body],
        dt: f64,
    ) -> Atmosphere {
        let atmosphere = *planet.atmosphere;
        let body = planet.body;
        let profile = atmosphere.gas.profile();
        let elapsed = dt.abs();

        let flux = incident_flux(body.position(), suns);
        let target = self.target_temperature(&planet, flux);

        let column_heat = profile.heat_capacity * atmosphere.pressure / body.surface_gravity();
        let temperature = if column_heat > 0.0 && target > 0.0 {
            let relax_time = column_heat / (4.0 * STEFAN_BOLTZMANN * target.powi(3));
            target + (atmosphere.temperature - target) * (-elapsed / relax_time).exp()
        } else {
            target
        };

        let mut pressure = atmosphere.pressure;
        if temperature > 0.0 && profile.molar_mass > 0.0 {
            let escape_speed_sq = body.escape_velocity().powi(2);
            let jeans = escape_speed_sq * profile.molar_mass / (2.0 * GAS_CONSTANT * temperature);
            if jeans < JEANS_ESCAPE_LIMIT {
                let e_fold = ESCAPE_TIMESCALE * jeans.max(f64::MIN_POSITIVE);
                pressure *= (-elapsed / e_fold).exp();
            }
        }

        Atmosphere::new(atmosphere.gas, pressure, temperature)
    }
}
