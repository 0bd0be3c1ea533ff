//! Orbitsim - headless driver
//!
//! Runs a preset for a number of fixed ticks and logs a summary.

use std::process::ExitCode;

use bevy::log::{LogPlugin, error, info};
use bevy::prelude::*;
use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{Parser, ValueEnum};

use orbitsim::catalog::{PRESETS, find_preset};
use orbitsim::physics::{CollisionRule, MergeGrouping};
use orbitsim::plugin::{OrbitSimPlugin, SimulationClock, SimulationSnapshot};
use orbitsim::simulation::SimulationConfig;
use orbitsim::types::{METERS_TO_AU, SECONDS_PER_DAY};

#[derive(Parser, Debug)]
#[command(about = "Run an N-body preset headless and log where everything ends up")]
struct Args {
    /// Preset to load
    #[arg(default_value = "inner_solar_system", value_parser = preset_ids())]
    preset: String,

    /// Number of fixed ticks to run
    #[arg(default_value_t = 24 * 365)]
    ticks: u64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = 3600.0)]
    seconds_per_tick: f64,

    /// Engine steps per tick
    #[arg(long, default_value_t = 4)]
    substeps: u32,

    /// When two bodies count as colliding
    #[arg(long, value_enum, default_value_t = Rule::FirstRadius)]
    collision_rule: Rule,

    /// How colliding bodies are grouped into merges
    #[arg(long, value_enum, default_value_t = Grouping::Single)]
    merge_grouping: Grouping,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rule {
    /// Distance below the lower-index body's radius
    FirstRadius,
    /// Spheres overlap
    SumOfRadii,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Grouping {
    /// All colliding bodies of a step become one
    Single,
    /// One merge per connected group
    Connected,
}

fn preset_ids() -> PossibleValuesParser {
    PossibleValuesParser::new(
        PRESETS
            .iter()
            .map(|p| PossibleValue::new(p.id).help(p.description)),
    )
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(preset) = find_preset(&args.preset) else {
        eprintln!("Unknown preset '{}'", args.preset);
        return ExitCode::FAILURE;
    };

    let config = SimulationConfig {
        collision_rule: match args.collision_rule {
            Rule::FirstRadius => CollisionRule::FirstBodyRadius,
            Rule::SumOfRadii => CollisionRule::SumOfRadii,
        },
        merge_grouping: match args.merge_grouping {
            Grouping::Single => MergeGrouping::SingleCluster,
            Grouping::Connected => MergeGrouping::ConnectedClusters,
        },
        ..Default::default()
    };
    let clock = SimulationClock {
        seconds_per_tick: args.seconds_per_tick,
        substeps: args.substeps,
        ..Default::default()
    };

    let mut app = App::new();
    app.add_plugins((
        LogPlugin::default(),
        OrbitSimPlugin::new(preset)
            .with_config(config)
            .with_clock(clock),
    ));
    app.finish();
    app.cleanup();

    if !app.world().contains_resource::<SimulationSnapshot>() {
        error!("Simulation failed to start");
        return ExitCode::FAILURE;
    }

    for _ in 0..args.ticks {
        app.world_mut().run_schedule(FixedUpdate);
        if app.world().resource::<SimulationClock>().paused {
            error!("Simulation halted early");
            break;
        }
    }

    let clock = app.world().resource::<SimulationClock>();
    let snapshot = &app.world().resource::<SimulationSnapshot>().0;
    info!(
        "Ran {} ticks ({:.1} days), {} bodies remain",
        clock.ticks,
        snapshot.time / SECONDS_PER_DAY,
        snapshot.bodies.len()
    );
    for body in snapshot.bodies.iter() {
        info!(
            "  {:<24} {:<14} |r| = {:.4} AU  |v| = {:.3} km/s",
            body.name(),
            body.variant().name(),
            body.position().length() * METERS_TO_AU,
            body.velocity().length() / 1000.0
        );
        if let Some(air) = body.atmosphere().filter(|a| a.has_gas()) {
            info!(
                "    {} at {:.0} Pa, {:.1} K{}",
                air.gas.name(),
                air.pressure,
                air.temperature,
                if air.is_habitable() { " (habitable)" } else { "" }
            );
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["orbitsim"]).unwrap();
        assert_eq!(args.preset, "inner_solar_system");
        assert_eq!(args.ticks, 24 * 365);
        assert_eq!(args.substeps, 4);
    }

    #[test]
    fn test_args_reject_unknown_preset() {
        assert!(Args::try_parse_from(["orbitsim", "no_such_system"]).is_err());
        let args = Args::try_parse_from(["orbitsim", "binary_star", "10", "--merge-grouping", "connected"])
            .unwrap();
        assert_eq!(args.preset, "binary_star");
        assert_eq!(args.ticks, 10);
        assert!(matches!(args.merge_grouping, Grouping::Connected));
    }

    #[test]
    fn test_args_cli_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
