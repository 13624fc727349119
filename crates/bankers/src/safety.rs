// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Safety-sequence search.
//!
//! A state is *safe* if some ordering of consumers exists in which each one
//! can obtain its remaining need from the working pool, finish, and release
//! its allocation back into the pool.
//!
//! # Algorithm
//!
//! ```text
//! work   = total
//! finish = [false; N]
//! repeat N times:
//!     scan i = 0..N (always from 0)
//!         first i with !finish[i] && need[i] <= work  → release, record i
//!     nothing found → UNSAFE (deadlock)
//! SAFE with the recorded sequence
//! ```
//!
//! The scan restarts at index 0 after every pick, so the lowest satisfiable
//! index always goes next. The returned sequence is fully determined by the
//! state. Worst case cost is O(N² · R).

use allocation_state::AllocationState;

/// Result of a safety check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SafetyReport {
    /// Every consumer can finish, in this order.
    Safe { sequence: Vec<usize> },
    /// The scan stalled; these consumers could not finish.
    Unsafe { blocked: Vec<usize> },
}

impl SafetyReport {
    /// Returns `true` for [`SafetyReport::Safe`].
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe { .. })
    }

    /// The safe sequence, or an empty slice when the state is unsafe.
    pub fn sequence(&self) -> &[usize] {
        match self {
            Self::Safe { sequence } => sequence,
            Self::Unsafe { .. } => &[],
        }
    }

    /// Consumers that could not finish. Empty when the state is safe.
    pub fn blocked(&self) -> &[usize] {
        match self {
            Self::Safe { .. } => &[],
            Self::Unsafe { blocked } => blocked,
        }
    }

    /// Splits into `(is_safe, sequence)`, with an empty sequence when unsafe.
    pub fn into_parts(self) -> (bool, Vec<usize>) {
        match self {
            Self::Safe { sequence } => (true, sequence),
            Self::Unsafe { .. } => (false, Vec::new()),
        }
    }
}

impl std::fmt::Display for SafetyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe { sequence } => write!(f, "safe, sequence {sequence:?}"),
            Self::Unsafe { blocked } => write!(f, "unsafe, blocked consumers {blocked:?}"),
        }
    }
}

/// Searches for a safe completion sequence. Read-only.
///
/// # Example
/// ```
/// use allocation_state::AllocationState;
///
/// let state = AllocationState::new(
///     vec![1, 1],
///     vec![vec![2, 1], vec![1, 2]],
///     vec![vec![1, 0], vec![0, 1]],
/// )
/// .unwrap();
///
/// let report = bankers::safety_check(&state);
/// assert_eq!(report.sequence(), &[0, 1]);
/// ```
pub fn safety_check(state: &AllocationState) -> SafetyReport {
    let n = state.num_consumers();
    let mut work = state.total().to_vec();
    let mut finish = vec![false; n];
    let mut sequence = Vec::with_capacity(n);

    for _ in 0..n {
        let mut found = false;

        for (i, done) in finish.iter_mut().enumerate() {
            if *done {
                continue;
            }
            let need = state.need(i);
            if need.iter().zip(&work).all(|(need, avail)| need <= avail) {
                for (w, held) in work.iter_mut().zip(state.allocated(i)) {
                    *w += held;
                }
                *done = true;
                sequence.push(i);
                found = true;
                tracing::debug!(consumer = i, ?work, "consumer can finish");
                break;
            }
        }

        if !found {
            let blocked: Vec<usize> = finish
                .iter()
                .enumerate()
                .filter(|(_, done)| !**done)
                .map(|(i, _)| i)
                .collect();
            tracing::debug!(?blocked, finished = sequence.len(), "no consumer can proceed");
            return SafetyReport::Unsafe { blocked };
        }
    }

    tracing::debug!(?sequence, "state is safe");
    SafetyReport::Safe { sequence }
}
