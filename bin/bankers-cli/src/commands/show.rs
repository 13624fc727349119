// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bankers show` command: display the current allocation state.

use std::path::PathBuf;

pub fn execute(scenario: Option<PathBuf>) -> anyhow::Result<()> {
    let config = super::load_scenario(scenario)?;
    let state = config.build()?;
    let snap = bankers::snapshot(&state);

    super::banner("Current Allocation");
    println!("  Scenario: {}", config.name);
    println!("  {}", snap.summary());
    println!();
    print!("{}", super::render::state_table(&config, &snap));

    Ok(())
}
