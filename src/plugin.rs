//! Bevy integration: drives the engine from a fixed-interval schedule.
//!
//! The plugin owns the [`Simulation`] as a resource and runs, in
//! `FixedUpdate`:
//! 1. `apply_pending_commands` - resets and queued body additions
//! 2. `advance_simulation` - one clock tick of engine steps
//! 3. `publish_snapshot` - refresh the read-only [`SimulationSnapshot`]
//!
//! Presentation code reads [`SimulationSnapshot`] and writes
//! [`SimulationCommands`]; it never touches the engine directly. A failed
//! step pauses the clock so the broken state can be inspected.

use bevy::log::{error, info, warn};
use bevy::prelude::*;

use crate::catalog::{BodyDescriptor, SystemPreset};
use crate::simulation::{Simulation, SimulationConfig, Snapshot};
use crate::types::SECONDS_PER_DAY;

/// Plugin providing the simulation engine and its fixed-step driver.
pub struct OrbitSimPlugin {
    preset: &'static SystemPreset,
    config: SimulationConfig,
    clock: SimulationClock,
}

impl OrbitSimPlugin {
    pub fn new(preset: &'static SystemPreset) -> Self {
        Self {
            preset,
            config: SimulationConfig::default(),
            clock: SimulationClock::default(),
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: SimulationClock) -> Self {
        self.clock = clock;
        self
    }
}

impl Plugin for OrbitSimPlugin {
    fn build(&self, app: &mut App) {
        let simulation = match Simulation::new(self.preset, self.config.clone()) {
            Ok(simulation) => simulation,
            Err(e) => {
                error!("Cannot load preset {}: {}", self.preset.id, e);
                return;
            }
        };

        info!(
            "Loaded preset: {} ({} bodies)",
            self.preset.name,
            simulation.bodies().len()
        );

        app.insert_resource(SimulationSnapshot(simulation.snapshot()))
            .insert_resource(simulation)
            .insert_resource(self.clock.clone())
            .init_resource::<SimulationCommands>()
            .add_systems(
                FixedUpdate,
                (apply_pending_commands, advance_simulation, publish_snapshot).chain(),
            );
    }
}

/// How much simulated time each fixed tick covers.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Simulated seconds per tick. Default: 1 hour.
    pub seconds_per_tick: f64,
    /// Engine steps per tick; each covers `seconds_per_tick / substeps`.
    /// Default: 4.
    pub substeps: u32,
    /// Whether ticking is suspended.
    pub paused: bool,
    /// Ticks completed since start or the last reset.
    pub ticks: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            seconds_per_tick: 3600.0,
            substeps: 4,
            paused: false,
            ticks: 0,
        }
    }
}

impl SimulationClock {
    /// Length of one engine step (s).
    pub fn step_seconds(&self) -> f64 {
        self.seconds_per_tick / self.substeps.max(1) as f64
    }

    /// Simulated days per tick.
    pub fn days_per_tick(&self) -> f64 {
        self.seconds_per_tick / SECONDS_PER_DAY
    }
}

/// Requests from the presentation layer, applied at the start of a tick.
#[derive(Resource, Default, Debug)]
pub struct SimulationCommands {
    reset: bool,
    additions: Vec<BodyDescriptor>,
}

impl SimulationCommands {
    /// Reset the engine to its preset. Pending additions are applied after.
    pub fn request_reset(&mut self) {
        self.reset = true;
    }

    pub fn add_body(&mut self, descriptor: BodyDescriptor) {
        self.additions.push(descriptor);
    }

    pub fn is_empty(&self) -> bool {
        !self.reset && self.additions.is_empty()
    }
}

/// Latest published state of the engine.
#[derive(Resource, Clone, Debug)]
pub struct SimulationSnapshot(pub Snapshot);

fn apply_pending_commands(
    mut simulation: ResMut<Simulation>,
    mut commands: ResMut<SimulationCommands>,
    mut clock: ResMut<SimulationClock>,
) {
    if commands.is_empty() {
        return;
    }

    if std::mem::take(&mut commands.reset) {
        match simulation.reset() {
            Ok(()) => {
                clock.ticks = 0;
                info!("Simulation reset to preset {}", simulation.preset().id);
            }
            Err(e) => error!("Reset failed: {}", e),
        }
    }

    for descriptor in commands.additions.drain(..) {
        if let Err(e) = simulation.add_body(&descriptor) {
            warn!("Rejected body '{}': {}", descriptor.name, e);
        }
    }
}

fn advance_simulation(mut simulation: ResMut<Simulation>, mut clock: ResMut<SimulationClock>) {
    if clock.paused {
        return;
    }

    let dt = clock.step_seconds();
    for _ in 0..clock.substeps.max(1) {
        match simulation.step(dt) {
            Ok(report) => {
                for merge in &report.merges {
                    info!(
                        "COLLISION! {} became '{}' at t = {:.2} days",
                        merge.members.join(" + "),
                        merge.name,
                        merge.time / SECONDS_PER_DAY
                    );
                }
            }
            Err(e) => {
                warn!("Simulation step failed, pausing: {}", e);
                clock.paused = true;
                return;
            }
        }
    }

    clock.ticks += 1;
}

fn publish_snapshot(simulation: Res<Simulation>, mut snapshot: ResMut<SimulationSnapshot>) {
    if simulation.is_changed() {
        snapshot.0 = simulation.snapshot();
    }
}
