// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # bankers
//!
//! Deadlock avoidance with the Banker's Algorithm over an
//! [`AllocationState`](allocation_state::AllocationState).
//!
//! # Operations
//!
//! | Operation | Mutates | Result |
//! |---|---|---|
//! | [`safety_check`] | no | [`SafetyReport`]: safe sequence or blocked consumers |
//! | [`request_resources`] | on grant only | [`RequestOutcome`]: granted or denied with a [`DenialReason`] |
//! | [`snapshot`] | no | [`AllocationSnapshot`](allocation_state::AllocationSnapshot) for display |
//!
//! A denial is a normal outcome, not an error. [`BankersError`] is reserved
//! for structural problems (unknown consumer, wrong vector length) and is
//! raised before anything is mutated.
//!
//! # Rollback
//!
//! ```text
//! request ──► bounds check ──fail──► Denied (no mutation)
//!                 │ ok
//!                 ▼
//!           apply_delta ──► safety_check ──safe──► Granted
//!                                 │ unsafe
//!                                 ▼
//!                           revert_delta ──► Denied (state restored)
//! ```
//!
//! # Example
//! ```
//! use allocation_state::AllocationState;
//!
//! let mut state = AllocationState::new(
//!     vec![3, 3, 2],
//!     vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2], vec![2, 2, 2], vec![4, 3, 3]],
//!     vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2], vec![2, 1, 1], vec![0, 0, 2]],
//! )
//! .unwrap();
//!
//! assert_eq!(bankers::safety_check(&state).sequence(), &[1, 3, 0, 2, 4]);
//!
//! let outcome = bankers::request_resources(&mut state, 1, &[1, 0, 2]).unwrap();
//! assert!(outcome.is_granted());
//! assert_eq!(bankers::snapshot(&state).total, vec![2, 3, 0]);
//! ```

mod error;
mod evaluator;
mod request;
mod safety;
mod shared;
mod stats;

pub use error::BankersError;
pub use evaluator::BankersEvaluator;
pub use request::{request_resources, DenialReason, RequestOutcome};
pub use safety::{safety_check, SafetyReport};
pub use shared::SharedAllocator;
pub use stats::EvaluationStats;

use allocation_state::{AllocationSnapshot, AllocationState};

/// Read-only view of available, allocated and need for display.
pub fn snapshot(state: &AllocationState) -> AllocationSnapshot {
    state.snapshot()
}
