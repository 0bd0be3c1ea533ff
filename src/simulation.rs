//! The simulation engine.
//!
//! A [`Simulation`] owns the live bodies and the clock. It is seeded by
//! deep-copying a [`SystemPreset`] and advanced with [`Simulation::step`],
//! which runs, in order: force accumulation, semi-implicit Euler
//! integration, collision detection, merging, and the habitability hook.
//!
//! Steps are atomic. Every phase works on a scratch copy of the bodies and
//! the result is committed only if every body is still finite; a failed step
//! leaves bodies and time exactly as they were.
//!
//! The engine is single-threaded and does no I/O. `step` takes `&mut self`,
//! so concurrent steps cannot happen; observers on other threads should read
//! the immutable [`Snapshot`]s it hands out.

use std::fmt;
use std::sync::Arc;

use bevy::log::{info, warn};
use bevy::prelude::Resource;

use crate::atmosphere::{Atmosphere, HabitabilityModel, RadiativeBalance};
use crate::body::{Body, BodyError};
use crate::catalog::{BodyDescriptor, SystemPreset, find_preset};
use crate::math::Vector3;
use crate::physics::{
    self, CollisionRule, KinematicState, MergeGrouping, detect_collisions, group_clusters,
};
use crate::types::G;

/// Pairs closer than this (m) exert no force on each other.
pub const DEFAULT_MIN_SEPARATION: f64 = 1e-6;

/// Engine configuration.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant (m³·kg⁻¹·s⁻²). Default: 6.6743e-11.
    pub gravitational_constant: f64,
    /// Separation below which a pair contributes no force (m). Default: 1e-6.
    pub min_separation: f64,
    /// Default: [`CollisionRule::FirstBodyRadius`].
    pub collision_rule: CollisionRule,
    /// Default: [`MergeGrouping::SingleCluster`].
    pub merge_grouping: MergeGrouping,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            min_separation: DEFAULT_MIN_SEPARATION,
            collision_rule: CollisionRule::default(),
            merge_grouping: MergeGrouping::default(),
        }
    }
}

/// Errors surfaced by the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("time step must be finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("body '{body}' reached a non-finite state at t = {time} s")]
    NonFiniteState { body: String, time: f64 },

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error(transparent)]
    Body(#[from] BodyError),
}

/// Lifecycle of an engine.
///
/// Only `step` and `reset` move between phases: a successful non-zero step
/// leaves `Idle`, and only `reset` returns to it. Stepping back to `t = 0`
/// with a negative `dt` stays in `Stepping`, since the bodies are no longer
/// a fresh copy of the preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationPhase {
    /// Freshly seeded or reset; no non-zero step taken yet.
    Idle,
    /// At least one successful non-zero step taken.
    Stepping,
}

/// One merge performed during a step.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeEvent {
    /// Simulation time at the end of the step (s)
    pub time: f64,
    /// Index of the resulting body after the step
    pub index: usize,
    /// Name of the resulting body
    pub name: String,
    /// Names of every body that went into the merge, in index order
    pub members: Vec<String>,
    /// Combined mass (kg)
    pub mass: f64,
}

/// What happened during one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    pub merges: Vec<MergeEvent>,
}

/// Immutable view of the engine at one instant.
///
/// Cheap to clone and safe to hand to another thread; it never changes
/// after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Simulation time (s)
    pub time: f64,
    pub bodies: Arc<[Body]>,
}

impl Snapshot {
    /// Bodies of variant Star.
    pub fn suns(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_star())
    }
}

/// The simulation engine.
#[derive(Resource)]
pub struct Simulation {
    preset: &'static SystemPreset,
    config: SimulationConfig,
    bodies: Vec<Body>,
    time: f64,
    steps: u64,
    habitability: Box<dyn HabitabilityModel>,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("preset", &self.preset.id)
            .field("config", &self.config)
            .field("time", &self.time)
            .field("steps", &self.steps)
            .field("bodies", &self.bodies)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Seed an engine from a preset with the default habitability model.
    pub fn new(preset: &'static SystemPreset, config: SimulationConfig) -> Result<Self, SimulationError> {
        Ok(Self {
            preset,
            config,
            bodies: instantiate(preset)?,
            time: 0.0,
            steps: 0,
            habitability: Box::new(RadiativeBalance),
        })
    }

    /// Seed an engine from the preset with the given id.
    pub fn from_preset_id(id: &str, config: SimulationConfig) -> Result<Self, SimulationError> {
        let preset = find_preset(id).ok_or_else(|| SimulationError::UnknownPreset(id.to_string()))?;
        Self::new(preset, config)
    }

    /// Replace the habitability hook.
    pub fn with_habitability_model(mut self, model: impl HabitabilityModel + 'static) -> Self {
        self.habitability = Box::new(model);
        self
    }

    pub fn preset(&self) -> &'static SystemPreset {
        self.preset
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Elapsed simulation time (s).
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn phase(&self) -> SimulationPhase {
        if self.steps == 0 {
            SimulationPhase::Idle
        } else {
            SimulationPhase::Stepping
        }
    }

    /// Live bodies in engine order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Bodies of variant Star, in engine order.
    pub fn suns(&self) -> Vec<&Body> {
        self.bodies.iter().filter(|b| b.is_star()).collect()
    }

    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// Copy the current state into an immutable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.time,
            bodies: Arc::from(self.bodies.as_slice()),
        }
    }

    /// Add a body under the same validation as preset bodies.
    pub fn add_body(&mut self, descriptor: &BodyDescriptor) -> Result<(), SimulationError> {
        let body = Body::from_descriptor(descriptor)?;
        info!("Added {} '{}' at t = {:.0} s", body.variant().name(), body.name(), self.time);
        self.bodies.push(body);
        Ok(())
    }

    /// Return to time zero with a fresh copy of the preset.
    pub fn reset(&mut self) -> Result<(), SimulationError> {
        self.bodies = instantiate(self.preset)?;
        self.time = 0.0;
        self.steps = 0;
        Ok(())
    }

    /// Advance by `dt` seconds.
    ///
    /// `dt == 0` is a no-op. Negative `dt` integrates backward and rewinds
    /// time; collisions and the habitability hook still run.
    pub fn step(&mut self, dt: f64) -> Result<StepReport, SimulationError> {
        if !dt.is_finite() {
            return Err(SimulationError::InvalidTimeStep(dt));
        }
        if dt == 0.0 {
            return Ok(StepReport::default());
        }

        let time = self.time + dt;
        let mut next = self.bodies.clone();

        // Forces are computed for every body before any body moves
        let forces = physics::compute_forces(
            &next,
            self.config.gravitational_constant,
            self.config.min_separation,
        );
        for (body, force) in next.iter_mut().zip(forces) {
            let state = KinematicState::new(body.position(), body.velocity());
            let state = physics::semi_implicit_euler(state, force, body.mass(), dt);
            body.set_kinematics(state.position, state.velocity);
        }

        let merges = self.resolve_collisions(&mut next, time)?;
        self.update_habitability(&mut next, dt)?;

        if let Some(bad) = next.iter().find(|b| !b.is_finite()) {
            warn!("Step to t = {} s rejected: '{}' is no longer finite", time, bad.name());
            return Err(SimulationError::NonFiniteState {
                body: bad.name().to_string(),
                time,
            });
        }

        self.bodies = next;
        self.time = time;
        self.steps += 1;
        Ok(StepReport { merges })
    }

    /// Detect collisions and replace each cluster with its merge.
    ///
    /// The merged body takes the slot of the cluster's lowest index; the
    /// other members are removed.
    fn resolve_collisions(&self, bodies: &mut Vec<Body>, time: f64) -> Result<Vec<MergeEvent>, SimulationError> {
        let pairs = detect_collisions(bodies, self.config.collision_rule);
        let clusters = group_clusters(bodies.len(), &pairs, self.config.merge_grouping);
        if clusters.is_empty() {
            return Ok(Vec::new());
        }

        let mut absorbed = vec![false; bodies.len()];
        let mut pending = Vec::with_capacity(clusters.len());
        for cluster in &clusters {
            let members: Vec<&Body> = cluster.iter().map(|&i| &bodies[i]).collect();
            let merged = Body::merge(&members)?;
            let names: Vec<String> = members.iter().map(|b| b.name().to_string()).collect();
            pending.push((cluster[0], merged, names));
            for &i in &cluster[1..] {
                absorbed[i] = true;
            }
        }

        let mut events = Vec::with_capacity(pending.len());
        for (slot, merged, members) in pending {
            let index = slot - absorbed[..slot].iter().filter(|&&gone| gone).count();
            info!(
                "Merged {} into '{}' ({:.3e} kg) at t = {:.0} s",
                members.join(", "),
                merged.name(),
                merged.mass(),
                time
            );
            events.push(MergeEvent {
                time,
                index,
                name: merged.name().to_string(),
                members,
                mass: merged.mass(),
            });
            bodies[slot] = merged;
        }

        let mut slot = 0;
        bodies.retain(|_| {
            let keep = !absorbed[slot];
            slot += 1;
            keep
        });

        Ok(events)
    }

    /// Run the habitability hook for every rocky planet with gas.
    fn update_habitability(&self, bodies: &mut [Body], dt: f64) -> Result<(), SimulationError> {
        let updates: Vec<(usize, Atmosphere)> = {
            let suns: Vec<&Body> = bodies.iter().filter(|b| b.is_star()).collect();
            bodies
                .iter()
                .enumerate()
                .filter_map(|(i, body)| {
                    let planet = body.planet_conditions()?;
                    planet.atmosphere.has_gas().then(|| {
                        (i, self.habitability.update_habitability(planet, &suns, dt))
                    })
                })
                .collect()
        };

        for (i, atmosphere) in updates {
            if !atmosphere.pressure.is_finite() || !atmosphere.temperature.is_finite() {
                return Err(SimulationError::NonFiniteState {
                    body: bodies[i].name().to_string(),
                    time: self.time + dt,
                });
            }
            atmosphere.validate()?;
            bodies[i].set_atmosphere(atmosphere);
        }
        Ok(())
    }

    /// Sum of all masses (kg).
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    /// Total linear momentum (kg·m/s).
    pub fn total_momentum(&self) -> Vector3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> f64 {
        physics::potential_energy(
            &self.bodies,
            self.config.gravitational_constant,
            self.config.min_separation,
        )
    }

    /// Kinetic plus potential energy (J).
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}

/// Deep-copy a preset into live bodies.
fn instantiate(preset: &SystemPreset) -> Result<Vec<Body>, BodyError> {
    preset.bodies.iter().map(Body::from_descriptor).collect()
}
