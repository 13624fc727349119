// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Text rendering of snapshots, safety reports and request outcomes.

use allocation_state::{AllocationSnapshot, Units};
use bankers::{DenialReason, RequestOutcome, SafetyReport};
use scenario::ScenarioConfig;

/// Renders the allocation table: one row per consumer with allocated and
/// need columns, followed by the available vector.
pub fn state_table(config: &ScenarioConfig, snap: &AllocationSnapshot) -> String {
    let mut out = String::new();
    let header: Vec<String> = (0..snap.num_resources())
        .map(|j| config.resource_label(j))
        .collect();

    out.push_str(&format!(
        "  {:<4} {:<16} {:<24} {:<24}\n",
        "Idx",
        "Consumer",
        format!("Allocated {}", header.join("/")),
        "Need",
    ));
    out.push_str(&format!("  {}\n", "-".repeat(70)));

    for (i, (alloc, need)) in snap.allocated.iter().zip(&snap.need).enumerate() {
        out.push_str(&format!(
            "  {:<4} {:<16} {:<24} {:<24}\n",
            i,
            truncate(&config.consumer_label(i), 16),
            units(alloc),
            units(need),
        ));
    }

    out.push_str(&format!("\n  Available: {}\n", units(&snap.total)));
    out
}

/// Formats a unit vector as `[1, 0, 2]`.
pub fn units(v: &[Units]) -> String {
    format!("{v:?}")
}

/// Formats a consumer sequence using labels, e.g. `er → peds → icu`.
pub fn sequence(config: &ScenarioConfig, seq: &[usize]) -> String {
    seq.iter()
        .map(|&i| config.consumer_label(i))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// One-line verdict for a safety report.
pub fn safety(config: &ScenarioConfig, report: &SafetyReport) -> String {
    match report {
        SafetyReport::Safe { sequence: seq } => {
            format!("SAFE    sequence: {}", sequence(config, seq))
        }
        SafetyReport::Unsafe { blocked } => {
            format!("UNSAFE  blocked: {}", labels(config, blocked))
        }
    }
}

/// One-line verdict for a request outcome.
pub fn outcome(config: &ScenarioConfig, outcome: &RequestOutcome) -> String {
    match outcome {
        RequestOutcome::Granted { sequence: seq } => {
            format!("GRANTED  safe sequence: {}", sequence(config, seq))
        }
        RequestOutcome::Denied { reason } => format!("DENIED   {}", denial(config, reason)),
    }
}

fn denial(config: &ScenarioConfig, reason: &DenialReason) -> String {
    match reason {
        DenialReason::ExceedsNeed {
            resource,
            requested,
            need,
        } => format!(
            "{requested} {} exceeds remaining need of {need}",
            config.resource_label(*resource)
        ),
        DenialReason::InsufficientAvailable {
            resource,
            requested,
            available,
        } => format!(
            "{requested} {} requested but only {available} available",
            config.resource_label(*resource)
        ),
        DenialReason::Unsafe { blocked } => format!(
            "would leave the system unsafe (blocked: {}); rolled back",
            labels(config, blocked)
        ),
    }
}

fn labels(config: &ScenarioConfig, indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| config.consumer_label(i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncates a string to `max_len` characters, adding "..." if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
