// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bankers replay` command: run the scenario's scripted requests in order.
//!
//! All requests go through a single [`SharedAllocator`](bankers::SharedAllocator)
//! so the session statistics are collected alongside the outcomes.

use super::render;
use bankers::{BankersError, SharedAllocator};
use std::path::PathBuf;

pub fn execute(scenario: Option<PathBuf>) -> anyhow::Result<()> {
    let config = super::load_scenario(scenario)?;
    let allocator = SharedAllocator::new(config.build()?);

    super::banner("Request Replay");
    println!("  Scenario: {}", config.name);
    println!("  Initial:  {}", render::safety(&config, &allocator.safety_check()?));
    println!();

    if config.requests.is_empty() {
        println!("  No scripted requests in this scenario.");
        return Ok(());
    }

    for (step, req) in config.requests.iter().enumerate() {
        let label = format!(
            "[{}/{}] {} requests {:?}",
            step + 1,
            config.requests.len(),
            config.consumer_label(req.consumer),
            req.units,
        );
        match allocator.request(req.consumer, &req.units) {
            Ok(outcome) => {
                println!("  {label}");
                println!("        {}", render::outcome(&config, &outcome));
            }
            Err(e @ (BankersError::InvalidConsumer { .. } | BankersError::State(_))) => {
                // A malformed script entry is reported and skipped.
                tracing::warn!("skipping request {}: {e}", step + 1);
                println!("  {label}");
                println!("        ERROR    {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!();
    print!("{}", render::state_table(&config, &allocator.snapshot()?));
    println!();
    println!("  {}", allocator.stats()?.summary());

    Ok(())
}
