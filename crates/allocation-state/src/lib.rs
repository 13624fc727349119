// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # allocation-state
//!
//! The resource allocation state consumed by the Banker's Algorithm: a fixed
//! pool of interchangeable units across `R` resource kinds, shared by `N`
//! consumers that each declare a maximum demand.
//!
//! # Key Components
//!
//! - [`AllocationState`] — available units, max demand, allocation, and
//!   derived need. Validates shapes on construction and owns the single
//!   update primitive, [`AllocationState::apply_delta`].
//! - [`AllocationSnapshot`] — a detached, serialisable copy of the vectors
//!   for display and comparison.
//! - [`StateError`] — structural errors (shape mismatch, bad consumer index).
//!
//! # Data Model
//!
//! ```text
//!            resource kind j →
//! total      [ 3  3  2 ]              available now
//! max[i]     [ 7  5  3 ]              declared upper bound
//! alloc[i]   [ 0  1  0 ]              currently held
//! need[i]    [ 7  4  3 ]  = max[i] - alloc[i]
//! ```
//!
//! Every mutation preserves `total[j] + Σᵢ alloc[i][j] == supply[j]`.
//!
//! # Example
//! ```
//! use allocation_state::AllocationState;
//!
//! let mut state = AllocationState::new(
//!     vec![3, 3, 2],
//!     vec![vec![3, 2, 2]],
//!     vec![vec![2, 0, 0]],
//! )
//! .unwrap();
//!
//! state.apply_delta(0, &[1, 0, 2]);
//! assert_eq!(state.total(), &[2, 3, 0]);
//! assert_eq!(state.need(0), &[0, 2, 0]);
//!
//! state.revert_delta(0, &[1, 0, 2]);
//! assert_eq!(state.total(), &[3, 3, 2]);
//! ```

mod error;
mod snapshot;
mod state;

pub use error::StateError;
pub use snapshot::AllocationSnapshot;
pub use state::AllocationState;

/// Signed unit count used for all stored quantities.
///
/// Caller-supplied quantities are `u32` and therefore never negative; the
/// signed representation lets need drop below zero when an allocation
/// exceeds its declared maximum, and lets a delta be negated for rollback.
pub type Units = i64;
