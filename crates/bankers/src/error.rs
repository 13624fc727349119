// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for request evaluation.
//!
//! A denied request is not an error: it is reported through
//! [`RequestOutcome::Denied`](crate::RequestOutcome::Denied). The variants
//! here cover structural problems only.

use allocation_state::StateError;

/// Structural errors that abort an evaluation without touching the state.
#[derive(Debug, thiserror::Error)]
pub enum BankersError {
    /// The request names a consumer outside `[0, num_consumers)`.
    #[error("invalid consumer {index}: expected an index below {num_consumers}")]
    InvalidConsumer { index: usize, num_consumers: usize },

    /// A shape or indexing error from the allocation state.
    #[error("allocation state error: {0}")]
    State(StateError),

    /// A thread panicked while holding the shared allocator lock.
    #[error("allocator lock poisoned by a panicked evaluation")]
    LockPoisoned,
}

impl From<StateError> for BankersError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::InvalidConsumer {
                index,
                num_consumers,
            } => Self::InvalidConsumer {
                index,
                num_consumers,
            },
            other => Self::State(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_consumer_is_lifted() {
        let err: BankersError = StateError::InvalidConsumer {
            index: 9,
            num_consumers: 3,
        }
        .into();
        assert!(matches!(
            err,
            BankersError::InvalidConsumer {
                index: 9,
                num_consumers: 3
            }
        ));
    }

    #[test]
    fn test_shape_mismatch_is_wrapped() {
        let err: BankersError = StateError::ShapeMismatch {
            context: "request vector".into(),
            expected: 3,
            found: 2,
        }
        .into();
        assert!(matches!(err, BankersError::State(_)));
        assert!(err.to_string().contains("expected 3, found 2"));
    }
}
