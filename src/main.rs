//! Crystal Pop entry point
//!
//! Headless host loop: builds a simulation, ticks it at a fixed cadence,
//! and logs the metrics a renderer would overlay (supersaturation and
//! particle count). Usage:
//!
//! ```text
//! crystal-pop [config.json] [--seed N] [--ticks N]
//! ```

use std::time::Duration;

use crystal_pop::consts::TICK_INTERVAL_MS;
use crystal_pop::{SimConfig, SimState, tick};

struct Args {
    config_path: Option<String>,
    seed: u64,
    ticks: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config_path: None,
        seed: 0,
        ticks: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--ticks" => {
                let value = iter.next().ok_or("--ticks needs a value")?;
                args.ticks = Some(value.parse().map_err(|_| format!("bad tick count: {value}"))?);
            }
            path if !path.starts_with('-') => args.config_path = Some(path.to_string()),
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(args)
}

fn load_config(path: Option<&str>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let config: SimConfig = serde_json::from_str(&json)?;
            log::info!("Loaded config from {path}");
            Ok(config)
        }
        None => {
            log::info!("Using default config");
            Ok(SimConfig::default())
        }
    }
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: crystal-pop [config.json] [--seed N] [--ticks N]");
            std::process::exit(2);
        }
    };

    let config = match load_config(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config: {err}");
            std::process::exit(1);
        }
    };

    let mut state = match SimState::new(config, args.seed) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("invalid config: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Starting simulation: {} particles, seed {}",
        state.particles.len(),
        state.seed
    );

    // One log line per simulated second at the reference cadence
    let report_every = 1000 / TICK_INTERVAL_MS;

    loop {
        tick(&mut state);
        let snapshot = state.snapshot();

        if snapshot.tick % report_every == 0 {
            log::info!(
                "tick {}: supersaturation {:.2}, particles {}",
                snapshot.tick,
                snapshot.supersaturation,
                snapshot.particle_count
            );
        }

        if let Some(ticks) = args.ticks {
            if snapshot.tick >= ticks {
                log::info!(
                    "Done after {} ticks: supersaturation {:.2}, particles {}",
                    snapshot.tick,
                    snapshot.supersaturation,
                    snapshot.particle_count
                );
                break;
            }
        }

        std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
}
