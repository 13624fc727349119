// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bankers request` command: evaluate one request against a scenario.
//!
//! The request is evaluated against the scenario's initial state; scripted
//! requests in the file are not applied first (see `bankers replay`).

use super::render;
use anyhow::Context;
use std::path::PathBuf;

pub fn execute(
    scenario_path: Option<PathBuf>,
    consumer: usize,
    units: String,
    json: bool,
) -> anyhow::Result<()> {
    let config = super::load_scenario(scenario_path)?;
    let mut state = config.build()?;
    let request = scenario::parse_units(&units)
        .with_context(|| format!("invalid request vector '{units}'"))?;

    let outcome = bankers::request_resources(&mut state, consumer, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    super::banner("Resource Request");
    println!(
        "  {} requests {:?}",
        config.consumer_label(consumer),
        request,
    );
    println!("  {}", render::outcome(&config, &outcome));
    println!();
    print!("{}", render::state_table(&config, &state.snapshot()));

    Ok(())
}
