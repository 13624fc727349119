// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for allocation state construction and indexing.

/// Structural errors raised by [`AllocationState`](crate::AllocationState).
///
/// These are programmer/input errors: no state is produced (construction)
/// and no mutation happens (indexing) when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Vector or matrix dimensions disagree.
    #[error("shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    /// A consumer index outside `[0, num_consumers)`.
    #[error("invalid consumer {index}: state has {num_consumers} consumers")]
    InvalidConsumer { index: usize, num_consumers: usize },
}

impl StateError {
    pub(crate) fn shape(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }
}
