// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end allocation scenarios.
//!
//! These walk the classic five-consumer, three-resource state through safety
//! checks and a series of requests, checking the committed or restored
//! vectors after every step.

use allocation_state::{AllocationState, StateError};
use bankers::{
    request_resources, safety_check, snapshot, BankersError, BankersEvaluator, DenialReason,
    RequestOutcome, SafetyReport, SharedAllocator,
};

// ── Helpers ────────────────────────────────────────────────────

fn classic() -> AllocationState {
    AllocationState::new(
        vec![3, 3, 2],
        vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
    )
    .unwrap()
}

// ── Safety ─────────────────────────────────────────────────────

#[test]
fn classic_state_is_safe() {
    let (safe, sequence) = safety_check(&classic()).into_parts();
    assert!(safe);
    assert_eq!(sequence, vec![1, 3, 0, 2, 4]);
}

#[test]
fn allocation_above_max_still_finishes() {
    // Consumer 1 holds more than it declared; its need is negative and it is
    // treated as able to finish, releasing enough for consumer 0.
    let state = AllocationState::new(
        vec![0, 0],
        vec![vec![2, 2], vec![1, 1]],
        vec![vec![0, 0], vec![2, 2]],
    )
    .unwrap();
    assert_eq!(state.need(1), &[-1, -1]);
    assert_eq!(
        safety_check(&state),
        SafetyReport::Safe {
            sequence: vec![1, 0]
        }
    );
}

// ── Requests ───────────────────────────────────────────────────

#[test]
fn grant_within_need_and_supply() {
    let mut state = classic();
    assert_eq!(state.need(1), &[1, 2, 2]);

    let outcome = request_resources(&mut state, 1, &[1, 0, 2]).unwrap();
    assert!(outcome.is_granted());
    assert_eq!(state.total(), &[2, 3, 0]);
    assert!(state.is_conserved());
}

#[test]
fn request_over_supply_denied_without_mutation() {
    let mut state = classic();
    let before = snapshot(&state);

    let outcome = request_resources(&mut state, 4, &[4, 0, 0]).unwrap();
    assert!(matches!(
        outcome.denial(),
        Some(DenialReason::InsufficientAvailable { resource: 0, .. })
    ));
    assert_eq!(snapshot(&state), before);
}

#[test]
fn request_driving_state_unsafe_is_rolled_back() {
    let mut state = classic();
    let before = snapshot(&state);

    // Within need ([4, 3, 1]) and supply ([3, 3, 2]), but leaves [0, 0, 2]
    // available, which satisfies no one.
    let outcome = request_resources(&mut state, 4, &[3, 3, 0]).unwrap();
    assert!(matches!(
        outcome,
        RequestOutcome::Denied {
            reason: DenialReason::Unsafe { .. }
        }
    ));
    assert_eq!(snapshot(&state), before);
    assert!(state.is_conserved());
}

#[test]
fn textbook_follow_up_requests() {
    let mut state = classic();
    assert!(request_resources(&mut state, 1, &[1, 0, 2]).unwrap().is_granted());

    // Consumer 4 asks for [3, 3, 0] but only [2, 3, 0] is free.
    let outcome = request_resources(&mut state, 4, &[3, 3, 0]).unwrap();
    assert!(matches!(
        outcome.denial(),
        Some(DenialReason::InsufficientAvailable {
            resource: 0,
            requested: 3,
            available: 2,
        })
    ));

    // Consumer 0 asks for [0, 2, 0]: fits, but the result is unsafe.
    let before = state.clone();
    let outcome = request_resources(&mut state, 0, &[0, 2, 0]).unwrap();
    assert!(matches!(outcome.denial(), Some(DenialReason::Unsafe { .. })));
    assert_eq!(state, before);
}

#[test]
fn consumer_can_run_to_completion() {
    let mut state = classic();
    // Consumer 3 needs [0, 1, 1] and can have it straight away.
    let outcome = request_resources(&mut state, 3, &[0, 1, 1]).unwrap();
    assert!(outcome.is_granted());
    assert_eq!(state.need(3), &[0, 0, 0]);
    assert_eq!(state.allocated(3), state.max_demand(3));
    assert_eq!(outcome.sequence(), &[3, 1, 0, 2, 4]);
}

// ── Structural errors ──────────────────────────────────────────

#[test]
fn shape_mismatch_produces_no_state() {
    let result = AllocationState::new(vec![1, 1], vec![vec![1, 1, 1]], vec![vec![0, 0, 0]]);
    assert!(matches!(
        result,
        Err(StateError::ShapeMismatch {
            expected: 2,
            found: 3,
            ..
        })
    ));
}

#[test]
fn out_of_range_consumer_is_an_error_not_a_denial() {
    let mut state = classic();
    let before = state.clone();
    let err = request_resources(&mut state, 42, &[0, 0, 0]).unwrap_err();
    assert!(matches!(err, BankersError::InvalidConsumer { index: 42, .. }));
    assert_eq!(state, before);
}

// ── Evaluator & shared allocator ───────────────────────────────

#[test]
fn evaluator_and_shared_allocator_agree() {
    let evaluator = BankersEvaluator::new();
    let mut direct = classic();
    let shared = SharedAllocator::new(classic());

    let script: [(usize, [u32; 3]); 4] = [
        (1, [1, 0, 2]),
        (4, [3, 3, 0]),
        (0, [0, 2, 0]),
        (3, [0, 1, 0]),
    ];
    for (consumer, request) in script {
        let a = evaluator.request(&mut direct, consumer, &request).unwrap();
        let b = shared.request(consumer, &request).unwrap();
        assert_eq!(a, b);
    }

    assert_eq!(shared.snapshot().unwrap(), snapshot(&direct));
    let stats = shared.stats().unwrap();
    assert_eq!(stats.requests, 4);
    assert_eq!(stats.granted, 2);
    assert_eq!(stats.denied_insufficient, 1);
    assert_eq!(stats.denied_unsafe, 1);
}
