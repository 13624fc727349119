// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The allocation state: available units, per-consumer maximum demand,
//! per-consumer allocation, and derived need.
//!
//! [`AllocationState`] owns all mutation of these vectors. The only
//! update primitive is [`AllocationState::apply_delta`], which moves units
//! between the available pool and one consumer while keeping need in
//! lockstep with the allocation.

use crate::{AllocationSnapshot, StateError, Units};

/// Available supply, maximum demand, allocation and need for `N` consumers
/// over `R` resource kinds.
///
/// # Invariants
/// - Every vector has length `R`; there are `N` rows of max demand,
///   allocation and need.
/// - `need[i][j] == max_demand[i][j] - allocated[i][j]` at all times.
/// - `total[j] + Σᵢ allocated[i][j] == supply[j]` (conservation), where
///   `supply` is fixed at construction.
///
/// Allocations above the declared maximum are accepted and produce a
/// negative need. Callers should avoid this: a negative need is always
/// satisfiable, so such a consumer is treated as able to finish.
///
/// # Example
/// ```
/// use allocation_state::AllocationState;
///
/// let state = AllocationState::new(
///     vec![3, 3, 2],
///     vec![vec![7, 5, 3], vec![3, 2, 2]],
///     vec![vec![0, 1, 0], vec![2, 0, 0]],
/// )
/// .unwrap();
///
/// assert_eq!(state.num_consumers(), 2);
/// assert_eq!(state.need(0), &[7, 4, 3]);
/// assert_eq!(state.supply(), &[5, 4, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationState {
    /// Currently unallocated units of each resource kind.
    total: Vec<Units>,
    /// Original supply of each resource kind (available + allocated).
    supply: Vec<Units>,
    max_demand: Vec<Vec<Units>>,
    allocated: Vec<Vec<Units>>,
    need: Vec<Vec<Units>>,
}

impl AllocationState {
    /// Builds a state from a length-`R` available vector and two `N × R`
    /// matrices.
    ///
    /// Returns [`StateError::ShapeMismatch`] if any max-demand row or
    /// allocation row has a length other than `R`, or if the two matrices
    /// have different row counts. Every row is checked.
    pub fn new(
        total: Vec<u32>,
        max_demand: Vec<Vec<u32>>,
        allocated: Vec<Vec<u32>>,
    ) -> Result<Self, StateError> {
        let num_resources = total.len();

        for (i, row) in max_demand.iter().enumerate() {
            if row.len() != num_resources {
                return Err(StateError::shape(
                    format!("max demand row {i}"),
                    num_resources,
                    row.len(),
                ));
            }
        }

        if allocated.len() != max_demand.len() {
            return Err(StateError::shape(
                "allocated row count",
                max_demand.len(),
                allocated.len(),
            ));
        }

        for (i, row) in allocated.iter().enumerate() {
            if row.len() != num_resources {
                return Err(StateError::shape(
                    format!("allocated row {i}"),
                    num_resources,
                    row.len(),
                ));
            }
        }

        let total: Vec<Units> = total.into_iter().map(Units::from).collect();
        let max_demand = widen_matrix(max_demand);
        let allocated = widen_matrix(allocated);

        let need = max_demand
            .iter()
            .zip(&allocated)
            .map(|(max, alloc)| max.iter().zip(alloc).map(|(m, a)| m - a).collect())
            .collect();

        let mut supply = total.clone();
        for row in &allocated {
            for (s, a) in supply.iter_mut().zip(row) {
                *s += a;
            }
        }

        Ok(Self {
            total,
            supply,
            max_demand,
            allocated,
            need,
        })
    }

    /// Number of consumers `N`.
    pub fn num_consumers(&self) -> usize {
        self.allocated.len()
    }

    /// Number of resource kinds `R`.
    pub fn num_resources(&self) -> usize {
        self.total.len()
    }

    /// Currently available units of each resource kind.
    pub fn total(&self) -> &[Units] {
        &self.total
    }

    /// Original supply of each resource kind, fixed at construction.
    pub fn supply(&self) -> &[Units] {
        &self.supply
    }

    /// Declared maximum demand of consumer `i`.
    ///
    /// # Panics
    /// Panics if `i >= num_consumers()`.
    pub fn max_demand(&self, i: usize) -> &[Units] {
        &self.max_demand[i]
    }

    /// Units currently held by consumer `i`.
    ///
    /// # Panics
    /// Panics if `i >= num_consumers()`.
    pub fn allocated(&self, i: usize) -> &[Units] {
        &self.allocated[i]
    }

    /// Remaining need of consumer `i`. May be negative (see type docs).
    ///
    /// # Panics
    /// Panics if `i >= num_consumers()`.
    pub fn need(&self, i: usize) -> &[Units] {
        &self.need[i]
    }

    /// Iterates over allocation rows in consumer order.
    pub fn allocated_rows(&self) -> impl Iterator<Item = &[Units]> {
        self.allocated.iter().map(Vec::as_slice)
    }

    /// Iterates over need rows in consumer order.
    pub fn need_rows(&self) -> impl Iterator<Item = &[Units]> {
        self.need.iter().map(Vec::as_slice)
    }

    /// Sum of allocations per resource kind, across all consumers.
    pub fn allocated_totals(&self) -> Vec<Units> {
        let mut sums = vec![0; self.num_resources()];
        for row in &self.allocated {
            for (s, a) in sums.iter_mut().zip(row) {
                *s += a;
            }
        }
        sums
    }

    /// Returns `true` if available plus allocated units still equal the
    /// original supply for every resource kind.
    pub fn is_conserved(&self) -> bool {
        self.allocated_totals()
            .iter()
            .zip(&self.total)
            .zip(&self.supply)
            .all(|((a, t), s)| a + t == *s)
    }

    /// Validates that `consumer` is in range and that a vector of length
    /// `len` matches the number of resource kinds.
    pub fn check_request_shape(&self, consumer: usize, len: usize) -> Result<(), StateError> {
        if consumer >= self.num_consumers() {
            return Err(StateError::InvalidConsumer {
                index: consumer,
                num_consumers: self.num_consumers(),
            });
        }
        if len != self.num_resources() {
            return Err(StateError::shape(
                "request vector",
                self.num_resources(),
                len,
            ));
        }
        Ok(())
    }

    /// Moves `delta` units from the available pool to `consumer`:
    /// `total -= delta`, `allocated[consumer] += delta`,
    /// `need[consumer] -= delta`.
    ///
    /// No bounds checking happens here. The caller must have validated the
    /// consumer index, the delta length, and that the move is admissible.
    ///
    /// # Panics
    /// Panics if `consumer >= num_consumers()`.
    pub fn apply_delta(&mut self, consumer: usize, delta: &[Units]) {
        debug_assert_eq!(delta.len(), self.num_resources());
        let allocated = &mut self.allocated[consumer];
        let need = &mut self.need[consumer];
        for (j, d) in delta.iter().enumerate() {
            self.total[j] -= d;
            allocated[j] += d;
            need[j] -= d;
        }
    }

    /// Exact inverse of [`apply_delta`](Self::apply_delta) for the same
    /// consumer and delta.
    pub fn revert_delta(&mut self, consumer: usize, delta: &[Units]) {
        let negated: Vec<Units> = delta.iter().map(|d| -d).collect();
        self.apply_delta(consumer, &negated);
    }

    /// Read-only copy of available, allocated and need for display.
    pub fn snapshot(&self) -> AllocationSnapshot {
        AllocationSnapshot {
            total: self.total.clone(),
            allocated: self.allocated.clone(),
            need: self.need.clone(),
        }
    }
}

fn widen_matrix(rows: Vec<Vec<u32>>) -> Vec<Vec<Units>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(Units::from).collect())
        .collect()
}
