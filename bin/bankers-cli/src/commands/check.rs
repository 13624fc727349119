// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bankers check` command: run the safety check on a scenario.

use super::render;
use std::path::PathBuf;

pub fn execute(scenario: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let config = super::load_scenario(scenario)?;
    let state = config.build()?;
    let report = bankers::safety_check(&state);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    super::banner("Safety Check");
    println!("  Scenario:  {}", config.name);
    println!(
        "  Size:      {} consumers × {} resources",
        state.num_consumers(),
        state.num_resources(),
    );
    println!("  Available: {}", render::units(state.total()));
    println!();
    println!("  {}", render::safety(&config, &report));

    Ok(())
}
