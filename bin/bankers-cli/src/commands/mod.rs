// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI subcommand implementations and shared helpers.

pub mod check;
pub mod example;
pub mod render;
pub mod replay;
pub mod request;
pub mod session;
pub mod show;

use anyhow::Context;
use scenario::ScenarioConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count:
/// none → warn, `-v` → info, `-vv` → debug, `-vvv` → trace.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the scenario at `path`, or the built-in classic example.
pub fn load_scenario(path: Option<PathBuf>) -> anyhow::Result<ScenarioConfig> {
    match path {
        Some(path) => ScenarioConfig::from_file(&path)
            .with_context(|| format!("failed to load scenario from '{}'", path.display())),
        None => {
            tracing::info!("no scenario given, using built-in classic example");
            Ok(ScenarioConfig::default())
        }
    }
}

/// Prints the boxed command banner.
pub fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║ {:^52} ║", format!("bankers · {title}"));
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}
