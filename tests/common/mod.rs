//! Common test utilities for integration tests.

#![allow(dead_code)]

use orbitsim::body::{Body, Variant};
use orbitsim::catalog::BodyDescriptor;
use orbitsim::math::Vector3;
use orbitsim::simulation::Simulation;

/// Descriptor for a unit-mass asteroid at rest.
pub const fn pebble(name: &'static str, radius: f64, position: Vector3) -> BodyDescriptor {
    BodyDescriptor::body(name, Variant::Asteroid, radius, 1.0, position, Vector3::ZERO)
}

/// Run `steps` steps of `dt` seconds, failing the test on any step error.
pub fn run(sim: &mut Simulation, dt: f64, steps: usize) {
    for i in 0..steps {
        if let Err(e) = sim.step(dt) {
            panic!("step {i} failed: {e}");
        }
    }
}

/// Distance between two named bodies.
pub fn separation(sim: &Simulation, a: &str, b: &str) -> f64 {
    let a = body(sim, a);
    let b = body(sim, b);
    a.position().distance(b.position())
}

pub fn body<'a>(sim: &'a Simulation, name: &str) -> &'a Body {
    sim.body_by_name(name)
        .unwrap_or_else(|| panic!("no body named '{name}'"))
}

/// Relative change, falling back to absolute change near zero.
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    if initial.abs() > 1e-10 {
        ((current - initial) / initial).abs()
    } else {
        (current - initial).abs()
    }
}
