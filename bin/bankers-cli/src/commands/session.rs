// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `bankers session` command: an interactive allocation session.
//!
//! The session owns exactly one [`AllocationState`] for its lifetime and
//! applies each typed command to it in order:
//!
//! ```text
//! bankers> request 1 1 0 2
//!   GRANTED  safe sequence: C1 → C3 → C0 → C2 → C4
//! bankers> check
//!   SAFE    sequence: C1 → C3 → C0 → C2 → C4
//! ```

use super::render;
use allocation_state::AllocationState;
use bankers::{BankersError, EvaluationStats};
use scenario::ScenarioConfig;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
  check                      run the safety check
  request <consumer> <units> request units, e.g. `request 1 1 0 2`
  show                       display the allocation table
  stats                      display session statistics
  help                       show this message
  quit                       end the session";

/// A parsed session command.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Check,
    Request { consumer: usize, units: Vec<u32> },
    Show,
    Stats,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => return Ok(None),
        "check" | "safe" => Command::Check,
        "show" | "display" => Command::Show,
        "stats" => Command::Stats,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "request" | "req" => {
            let (index, units) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: request <consumer> <units...>".to_string())?;
            let consumer = index
                .parse()
                .map_err(|_| format!("invalid consumer index '{index}'"))?;
            let units = scenario::parse_units(units).map_err(|e| e.to_string())?;
            Command::Request { consumer, units }
        }
        other => return Err(format!("unknown command '{other}' (try `help`)")),
    };
    Ok(Some(command))
}

pub fn execute(scenario_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = super::load_scenario(scenario_path)?;
    let state = config.build()?;

    super::banner("Interactive Session");
    println!("  Scenario: {} (type `help` for commands)", config.name);
    println!();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, state, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drives a session over arbitrary input and output streams.
fn run<R: BufRead, W: Write>(
    config: &ScenarioConfig,
    mut state: AllocationState,
    input: R,
    mut out: W,
) -> io::Result<EvaluationStats> {
    let mut stats = EvaluationStats::default();
    let mut lines = input.lines();

    loop {
        write!(out, "bankers> ")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "  error: {msg}")?;
                continue;
            }
        };

        match command {
            Command::Check => {
                let report = bankers::safety_check(&state);
                stats.record_safety_check(&report);
                writeln!(out, "  {}", render::safety(config, &report))?;
            }
            Command::Request { consumer, units } => {
                match bankers::request_resources(&mut state, consumer, &units) {
                    Ok(outcome) => {
                        stats.record_outcome(&outcome);
                        writeln!(out, "  {}", render::outcome(config, &outcome))?;
                    }
                    Err(e @ (BankersError::InvalidConsumer { .. } | BankersError::State(_))) => {
                        writeln!(out, "  error: {e}")?;
                    }
                    Err(e) => return Err(io::Error::other(e)),
                }
            }
            Command::Show => write!(out, "{}", render::state_table(config, &state.snapshot()))?,
            Command::Stats => writeln!(out, "  {}", stats.summary())?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    writeln!(out)?;
    tracing::info!("session ended: {}", stats.summary());
    Ok(stats)
}
