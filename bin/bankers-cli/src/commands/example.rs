// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bankers example` command: print the built-in scenario as TOML.
//!
//! Redirect the output to a file to get a starting point for a custom
//! scenario.

pub fn execute() -> anyhow::Result<()> {
    let toml = scenario::ScenarioConfig::default().to_toml()?;
    print!("{toml}");
    Ok(())
}
