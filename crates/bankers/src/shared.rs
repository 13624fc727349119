// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A mutex-guarded allocator for embedding the evaluator in a concurrent
//! service.
//!
//! The tentative apply, safety re-check, and commit-or-rollback of a request
//! must happen as one critical section: if another request interleaved
//! between the tentative apply and the rollback, conservation would break.
//! [`SharedAllocator`] therefore holds the whole [`AllocationState`] behind a
//! single `Mutex` and runs every evaluation under that one lock.
//!
//! # Thread Safety
//! `SharedAllocator` is `Send + Sync` and cheap to clone; clones share the
//! same state.

use crate::{
    request_resources, safety_check, BankersError, EvaluationStats, RequestOutcome, SafetyReport,
};
use allocation_state::{AllocationSnapshot, AllocationState};
use std::sync::{Arc, Mutex, MutexGuard};

struct AllocatorInner {
    state: AllocationState,
    stats: EvaluationStats,
}

/// A cloneable handle to one allocation state shared between threads.
///
/// # Example
/// ```
/// use allocation_state::AllocationState;
/// use bankers::SharedAllocator;
///
/// let state = AllocationState::new(vec![2], vec![vec![2]], vec![vec![0]]).unwrap();
/// let allocator = SharedAllocator::new(state);
///
/// let worker = allocator.clone();
/// std::thread::spawn(move || worker.request(0, &[1]).unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(allocator.snapshot().unwrap().total, vec![1]);
/// ```
#[derive(Clone)]
pub struct SharedAllocator {
    inner: Arc<Mutex<AllocatorInner>>,
}

impl SharedAllocator {
    /// Wraps `state` for shared access.
    pub fn new(state: AllocationState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AllocatorInner {
                state,
                stats: EvaluationStats::default(),
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, AllocatorInner>, BankersError> {
        self.inner.lock().map_err(|_| BankersError::LockPoisoned)
    }

    /// Runs a safety check on the current state.
    pub fn safety_check(&self) -> Result<SafetyReport, BankersError> {
        let mut inner = self.lock()?;
        let report = safety_check(&inner.state);
        inner.stats.record_safety_check(&report);
        Ok(report)
    }

    /// Evaluates a request under the allocator lock.
    pub fn request(
        &self,
        consumer: usize,
        request: &[u32],
    ) -> Result<RequestOutcome, BankersError> {
        let mut inner = self.lock()?;
        let outcome = request_resources(&mut inner.state, consumer, request)?;
        inner.stats.record_outcome(&outcome);
        Ok(outcome)
    }

    /// Returns a copy of the current vectors.
    pub fn snapshot(&self) -> Result<AllocationSnapshot, BankersError> {
        Ok(self.lock()?.state.snapshot())
    }

    /// Returns a copy of the evaluation statistics.
    pub fn stats(&self) -> Result<EvaluationStats, BankersError> {
        Ok(self.lock()?.stats.clone())
    }

    /// Returns a clone of the full allocation state.
    pub fn state(&self) -> Result<AllocationState, BankersError> {
        Ok(self.lock()?.state.clone())
    }
}

impl std::fmt::Debug for SharedAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut dbg = f.debug_struct("SharedAllocator");
        match self.inner.lock() {
            Ok(inner) => dbg
                .field("consumers", &inner.state.num_consumers())
                .field("resources", &inner.state.num_resources())
                .field("available", &inner.state.total()),
            Err(_) => dbg.field("poisoned", &true),
        };
        dbg.finish()
    }
}
