// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # bankers
//!
//! Command-line interface for the Banker's Algorithm resource allocator.
//!
//! ## Usage
//! ```bash
//! # Is the scenario in a safe state?
//! bankers --scenario scenarios/hospital.toml check
//!
//! # Evaluate one request
//! bankers --scenario scenarios/hospital.toml request --consumer 3 --units "1 0 2"
//!
//! # Replay the scenario's scripted requests
//! bankers --scenario scenarios/classic.toml replay
//!
//! # Interactive session on the built-in classic scenario
//! bankers session
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bankers",
    about = "Deadlock-avoiding resource allocation with the Banker's Algorithm",
    version,
    author
)]
struct Cli {
    /// Path to a TOML scenario file (defaults to the built-in classic example).
    #[arg(short, long, global = true)]
    scenario: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the scenario is in a safe state.
    Check {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a single resource request.
    Request {
        /// Index of the requesting consumer.
        #[arg(short, long)]
        consumer: usize,

        /// Whitespace-separated units per resource kind (e.g., "1 0 2").
        #[arg(short, long)]
        units: String,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Display available units and per-consumer allocation and need.
    Show,

    /// Replay the scenario's scripted requests in order.
    Replay,

    /// Start an interactive session on the scenario.
    Session,

    /// Print the built-in classic scenario as TOML.
    Example,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let scenario = cli.scenario;
    match cli.command {
        Commands::Check { json } => commands::check::execute(scenario, json),
        Commands::Request {
            consumer,
            units,
            json,
        } => commands::request::execute(scenario, consumer, units, json),
        Commands::Show => commands::show::execute(scenario),
        Commands::Replay => commands::replay::execute(scenario),
        Commands::Session => commands::session::execute(scenario),
        Commands::Example => commands::example::execute(),
    }
}
