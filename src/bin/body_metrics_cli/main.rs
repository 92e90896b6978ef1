// ABOUTME: body-metrics CLI - manages household profiles and processes scale readings
// ABOUTME: Stores profiles and smoothing state in a JSON file between invocations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Enroll household members
//! body-metrics profiles add --name Alice --weight 60 --height 165 --age 34 --sex female
//! body-metrics profiles add --name Bob --weight 85 --height 182 --age 41 --sex male
//!
//! # List enrolled profiles with their smoothing state
//! body-metrics profiles list
//!
//! # Process a reading from the scale's sensor states
//! body-metrics reading --weight "61.2 kg" --impedance "512"
//!
//! # Forget a profile's smoothing history, or remove the profile
//! body-metrics profiles reset Alice
//! body-metrics profiles remove Bob
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;

use body_metrics::config::BodyMetricsConfig;
use body_metrics::errors::{AppError, AppResult};
use body_metrics::logging::LoggingConfig;
use body_metrics::models::Sex;
use clap::{Parser, Subcommand};
use tracing::debug;

type Result<T> = AppResult<T>;

const DEFAULT_PROFILES_FILE: &str = "body_metrics_profiles.json";

#[derive(Parser)]
#[command(
    name = "body-metrics",
    about = "Household body scale identity matching and body composition",
    long_about = "Attributes bathroom scale readings to enrolled household members and derives smoothed body composition metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Profiles file (defaults to $BODY_METRICS_PROFILES, then ./body_metrics_profiles.json)
    #[arg(long, global = true)]
    profiles_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management commands
    Profiles {
        #[command(subcommand)]
        action: ProfilesCommand,
    },

    /// Process one scale reading and print the outcome as JSON
    Reading {
        /// Weight sensor state, e.g. "61.2 kg"
        #[arg(long)]
        weight: String,

        /// Impedance sensor state, e.g. "512" or "unavailable"
        #[arg(long)]
        impedance: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfilesCommand {
    /// List enrolled profiles
    List {
        /// Print the profiles file contents as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enroll a new profile
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Expected weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Age (years)
        #[arg(long)]
        age: u32,

        /// Sex: male or female
        #[arg(long)]
        sex: Sex,

        /// Personal weight tolerance (kg), overrides the global one
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Remove a profile and its smoothing state
    Remove {
        /// Profile name or id
        profile: String,
    },

    /// Forget a profile's smoothing history
    Reset {
        /// Profile name or id
        profile: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Logging setup failed: {e}")))?;

    let profiles_file = cli
        .profiles_file
        .or_else(|| env::var("BODY_METRICS_PROFILES").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILES_FILE));
    debug!(profiles_file = %profiles_file.display(), "Using profiles file");

    match cli.command {
        Command::Profiles { action } => match action {
            ProfilesCommand::List { json } => commands::profiles::list(&profiles_file, json)?,
            ProfilesCommand::Add {
                name,
                weight,
                height,
                age,
                sex,
                tolerance,
            } => {
                commands::profiles::add(&profiles_file, name, weight, height, age, sex, tolerance)?;
            }
            ProfilesCommand::Remove { profile } => {
                commands::profiles::remove(&profiles_file, &profile)?;
            }
            ProfilesCommand::Reset { profile } => {
                commands::profiles::reset(&profiles_file, &profile)?;
            }
        },
        Command::Reading { weight, impedance } => {
            let config = BodyMetricsConfig::load()?;
            commands::reading::process(&profiles_file, config, &weight, impedance.as_deref())?;
        }
    }

    Ok(())
}
