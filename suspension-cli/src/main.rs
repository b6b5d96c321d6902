//! Command-line front end for the suspension engine.
//!
//! Builds a [`ParticleSuspension`] from an optional TOML file, runs the
//! three swelling sweeps and prints them as one whitespace-separated table:
//! `swell  frac_tagged  rate  curvature`.
//!
//! Usage: `suspension [--config <path> | <path>]`. Log level comes from
//! `RUST_LOG` (default `info`).

mod config;

use std::process::ExitCode;

use log::{error, info};
use suspension_core::{ParticleSuspension, SuspensionResult};

use config::RunConfig;

fn config_path() -> Option<String> {
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(flag) if flag == "--config" || flag == "-c" => args.next(),
        other => other,
    }
}

fn run() -> SuspensionResult<()> {
    let cfg = match config_path() {
        Some(path) => {
            info!("Loading run configuration from {path}");
            RunConfig::load_from_file(path)?
        }
        None => RunConfig::default(),
    };

    let suspension = ParticleSuspension::from_config(cfg.suspension_config())?;
    info!(
        "Built {} particles in a cell of side {:.4}",
        suspension.len(),
        suspension.boxsize()
    );

    let sweep = &cfg.sweep;
    let frac = suspension.frac_tag(sweep.training_swell, sweep.max_swell, sweep.swell_step)?;
    let rate = suspension.tag_rate(sweep.training_swell, sweep.max_swell, sweep.swell_step)?;
    let curve =
        suspension.tag_curvature(sweep.training_swell, sweep.max_swell, sweep.swell_step)?;

    println!("# swell frac_tagged rate curvature");
    for (((s, f), r), c) in frac
        .iter()
        .zip(rate.values.iter())
        .zip(curve.values.iter())
    {
        println!("{s:.6} {f:.6} {r:.6} {c:.6}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
