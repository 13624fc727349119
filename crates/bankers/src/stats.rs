// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Evaluation statistics for diagnostics.
//!
//! [`EvaluationStats`] tracks how many safety checks and requests an
//! allocator has served and why requests were denied.

use crate::{DenialReason, RequestOutcome, SafetyReport};

/// Cumulative counters for an allocator session.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct EvaluationStats {
    /// Explicit safety checks (not counting those run inside requests).
    pub safety_checks: u64,
    /// Explicit safety checks that found the state unsafe.
    pub unsafe_checks: u64,
    /// Requests evaluated, granted or denied.
    pub requests: u64,
    /// Requests committed.
    pub granted: u64,
    /// Requests denied because they exceeded the consumer's remaining need.
    pub denied_exceeds_need: u64,
    /// Requests denied because too few units were available.
    pub denied_insufficient: u64,
    /// Requests tentatively applied, found unsafe, and rolled back.
    pub denied_unsafe: u64,
}

impl EvaluationStats {
    /// Total number of denied requests.
    pub fn denied(&self) -> u64 {
        self.denied_exceeds_need + self.denied_insufficient + self.denied_unsafe
    }

    /// Fraction of requests denied, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` if no requests have been evaluated.
    pub fn denial_ratio(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        self.denied() as f64 / self.requests as f64
    }

    /// Records the result of an explicit safety check.
    pub fn record_safety_check(&mut self, report: &SafetyReport) {
        self.safety_checks += 1;
        if !report.is_safe() {
            self.unsafe_checks += 1;
        }
    }

    /// Records the outcome of an evaluated request.
    pub fn record_outcome(&mut self, outcome: &RequestOutcome) {
        self.requests += 1;
        match outcome.denial() {
            None => self.granted += 1,
            Some(DenialReason::ExceedsNeed { .. }) => self.denied_exceeds_need += 1,
            Some(DenialReason::InsufficientAvailable { .. }) => self.denied_insufficient += 1,
            Some(DenialReason::Unsafe { .. }) => self.denied_unsafe += 1,
        }
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Requests: {} total ({} granted, {} denied, {:.0}% denial rate: \
             {} over need, {} over available, {} rolled back), \
             {} safety checks ({} unsafe)",
            self.requests,
            self.granted,
            self.denied(),
            self.denial_ratio() * 100.0,
            self.denied_exceeds_need,
            self.denied_insufficient,
            self.denied_unsafe,
            self.safety_checks,
            self.unsafe_checks,
        )
    }
}
