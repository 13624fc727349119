// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The stateless [`BankersEvaluator`] entry point.

use crate::{request_resources, safety_check, BankersError, RequestOutcome, SafetyReport};
use allocation_state::AllocationState;

/// Stateless Banker's Algorithm evaluator.
///
/// All state lives in the [`AllocationState`] passed in; the evaluator only
/// groups the two algorithms behind one value that a presentation layer can
/// hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankersEvaluator;

impl BankersEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// See [`safety_check`].
    pub fn safety_check(&self, state: &AllocationState) -> SafetyReport {
        safety_check(state)
    }

    /// See [`request_resources`].
    pub fn request(
        &self,
        state: &mut AllocationState,
        consumer: usize,
        request: &[u32],
    ) -> Result<RequestOutcome, BankersError> {
        request_resources(state, consumer, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_delegates() {
        let mut state = AllocationState::new(
            vec![1, 1],
            vec![vec![2, 1], vec![1, 2]],
            vec![vec![1, 0], vec![0, 1]],
        )
        .unwrap();
        let evaluator = BankersEvaluator::new();

        assert!(evaluator.safety_check(&state).is_safe());

        let outcome = evaluator.request(&mut state, 0, &[1, 1]).unwrap();
        assert_eq!(outcome.sequence(), &[0, 1]);
        assert_eq!(state.total(), &[0, 0]);
    }
}
