// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Request evaluation with rollback.
//!
//! The allocation policy is optimistic apply-then-verify:
//!
//! 1. Reject outright if the request exceeds the consumer's remaining need
//!    or the currently available units. Nothing is mutated.
//! 2. Apply the request tentatively.
//! 3. Re-run the safety check. Keep the change if the state is still safe,
//!    otherwise apply the exact inverse and deny.
//!
//! A denied request always leaves the state exactly as it was.

use crate::safety::{safety_check, SafetyReport};
use crate::BankersError;
use allocation_state::{AllocationState, Units};

/// Why a request was not granted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DenialReason {
    /// The consumer asked for more than its declared remaining need.
    ExceedsNeed {
        resource: usize,
        requested: Units,
        need: Units,
    },
    /// Not enough free units of a resource kind right now.
    InsufficientAvailable {
        resource: usize,
        requested: Units,
        available: Units,
    },
    /// Granting would leave no safe sequence. The tentative allocation was
    /// rolled back.
    Unsafe { blocked: Vec<usize> },
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExceedsNeed {
                resource,
                requested,
                need,
            } => write!(
                f,
                "request of {requested} for resource {resource} exceeds remaining need {need}"
            ),
            Self::InsufficientAvailable {
                resource,
                requested,
                available,
            } => write!(
                f,
                "request of {requested} for resource {resource} exceeds available {available}"
            ),
            Self::Unsafe { blocked } => write!(
                f,
                "granting would leave the system unsafe (blocked consumers {blocked:?})"
            ),
        }
    }
}

/// The business outcome of a request. Structural problems are reported
/// through [`BankersError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RequestOutcome {
    /// The allocation was committed; the state remains safe in this order.
    Granted { sequence: Vec<usize> },
    /// The state is unchanged.
    Denied { reason: DenialReason },
}

impl RequestOutcome {
    /// Returns `true` for [`RequestOutcome::Granted`].
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// The safe sequence after a grant, or an empty slice on denial.
    pub fn sequence(&self) -> &[usize] {
        match self {
            Self::Granted { sequence } => sequence,
            Self::Denied { .. } => &[],
        }
    }

    /// The denial reason, if denied.
    pub fn denial(&self) -> Option<&DenialReason> {
        match self {
            Self::Granted { .. } => None,
            Self::Denied { reason } => Some(reason),
        }
    }

    fn denied(reason: DenialReason) -> Self {
        Self::Denied { reason }
    }
}

impl std::fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Granted { sequence } => write!(f, "granted, safe sequence {sequence:?}"),
            Self::Denied { reason } => write!(f, "denied: {reason}"),
        }
    }
}

/// Evaluates `request` from `consumer` against `state`, committing it only
/// if the resulting state is safe.
///
/// Returns [`BankersError::InvalidConsumer`] if `consumer` is out of range
/// and [`BankersError::State`] if `request` has the wrong length. In both
/// cases the state is untouched.
///
/// # Example
/// ```
/// use allocation_state::AllocationState;
///
/// let mut state = AllocationState::new(
///     vec![2],
///     vec![vec![3], vec![2]],
///     vec![vec![1], vec![0]],
/// )
/// .unwrap();
///
/// let outcome = bankers::request_resources(&mut state, 0, &[2]).unwrap();
/// assert!(outcome.is_granted());
/// assert_eq!(state.total(), &[0]);
/// ```
pub fn request_resources(
    state: &mut AllocationState,
    consumer: usize,
    request: &[u32],
) -> Result<RequestOutcome, BankersError> {
    state.check_request_shape(consumer, request.len())?;

    let delta: Vec<Units> = request.iter().copied().map(Units::from).collect();

    if let Some(reason) = check_bounds(state, consumer, &delta) {
        tracing::debug!(consumer, ?request, %reason, "request denied by bounds check");
        return Ok(RequestOutcome::denied(reason));
    }

    state.apply_delta(consumer, &delta);

    match safety_check(state) {
        SafetyReport::Safe { sequence } => {
            tracing::info!(consumer, ?request, ?sequence, "request granted");
            Ok(RequestOutcome::Granted { sequence })
        }
        SafetyReport::Unsafe { blocked } => {
            state.revert_delta(consumer, &delta);
            tracing::warn!(consumer, ?request, ?blocked, "request rolled back: unsafe");
            Ok(RequestOutcome::denied(DenialReason::Unsafe { blocked }))
        }
    }
}

/// Need is checked across every resource kind before availability, so a
/// request violating both is reported as exceeding need.
fn check_bounds(state: &AllocationState, consumer: usize, delta: &[Units]) -> Option<DenialReason> {
    let remaining = state.need(consumer);
    for (resource, (&requested, &need)) in delta.iter().zip(remaining).enumerate() {
        if requested > need {
            return Some(DenialReason::ExceedsNeed {
                resource,
                requested,
                need,
            });
        }
    }

    for (resource, (&requested, &available)) in delta.iter().zip(state.total()).enumerate() {
        if requested > available {
            return Some(DenialReason::InsufficientAvailable {
                resource,
                requested,
                available,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_grant_within_bounds_and_safe() {
        let mut state = classic();
        let outcome = request_resources(&mut state, 1, &[1, 0, 2]).unwrap();
        assert_eq!(
            outcome,
            RequestOutcome::Granted {
                sequence: vec![1, 3, 0, 2, 4]
            }
        );
        assert_eq!(state.total(), &[2, 3, 0]);
        assert_eq!(state.allocated(1), &[3, 0, 2]);
        assert_eq!(state.need(1), &[0, 2, 0]);
        assert!(state.is_conserved());
    }

    #[test]
    fn test_exceeds_available() {
        let mut state = classic();
        let before = state.clone();
        let outcome = request_resources(&mut state, 4, &[4, 0, 0]).unwrap();
        assert_eq!(
            outcome.denial(),
            Some(&DenialReason::InsufficientAvailable {
                resource: 0,
                requested: 4,
                available: 3,
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_exceeds_need() {
        let mut state = classic();
        let before = state.clone();
        let outcome = request_resources(&mut state, 3, &[1, 0, 0]).unwrap();
        assert_eq!(
            outcome.denial(),
            Some(&DenialReason::ExceedsNeed {
                resource: 0,
                requested: 1,
                need: 0,
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_need_checked_before_available() {
        // Resource 0 exceeds availability, resource 1 exceeds need: the need
        // violation is reported even though it sits at a later index.
        let mut state =
            AllocationState::new(vec![0, 5], vec![vec![1, 1]], vec![vec![0, 0]]).unwrap();
        let outcome = request_resources(&mut state, 0, &[1, 2]).unwrap();
        assert_eq!(
            outcome.denial(),
            Some(&DenialReason::ExceedsNeed {
                resource: 1,
                requested: 2,
                need: 1,
            })
        );
    }

    #[test]
    fn test_unsafe_request_rolled_back() {
        let mut state = classic();
        let before = state.clone();
        let outcome = request_resources(&mut state, 4, &[3, 3, 0]).unwrap();
        assert!(!outcome.is_granted());
        assert!(matches!(
            outcome.denial(),
            Some(DenialReason::Unsafe { blocked }) if blocked == &vec![0, 1, 2, 3, 4]
        ));
        assert_eq!(state, before);
        assert!(outcome.sequence().is_empty());
    }

    #[test]
    fn test_denial_is_idempotent() {
        let mut state = classic();
        let first = request_resources(&mut state, 4, &[3, 3, 0]).unwrap();
        let after_first = state.clone();
        let second = request_resources(&mut state, 4, &[3, 3, 0]).unwrap();
        assert_eq!(first, second);
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_zero_request_on_safe_state() {
        let mut state = classic();
        let before = state.clone();
        let outcome = request_resources(&mut state, 0, &[0, 0, 0]).unwrap();
        assert!(outcome.is_granted());
        assert_eq!(state, before);
    }

    #[test]
    fn test_invalid_consumer() {
        let mut state = classic();
        let before = state.clone();
        let err = request_resources(&mut state, 5, &[0, 0, 0]).unwrap_err();
        assert!(matches!(
            err,
            BankersError::InvalidConsumer {
                index: 5,
                num_consumers: 5
            }
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_wrong_request_length() {
        let mut state = classic();
        let err = request_resources(&mut state, 0, &[1, 0]).unwrap_err();
        assert!(matches!(err, BankersError::State(_)));
    }

    #[test]
    fn test_outcome_display() {
        let granted = RequestOutcome::Granted { sequence: vec![0] };
        assert_eq!(granted.to_string(), "granted, safe sequence [0]");

        let denied = RequestOutcome::Denied {
            reason: DenialReason::InsufficientAvailable {
                resource: 0,
                requested: 4,
                available: 3,
            },
        };
        assert_eq!(
            denied.to_string(),
            "denied: request of 4 for resource 0 exceeds available 3"
        );
    }
}
