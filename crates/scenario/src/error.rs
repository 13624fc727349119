// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for scenario loading and input parsing.

use allocation_state::StateError;
use std::path::PathBuf;

/// Errors that can occur while reading a scenario or parsing user input.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("cannot read scenario '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scenario file is not valid TOML or does not match the schema.
    #[error("TOML parse error: {0}")]
    Parse(String),

    /// The scenario could not be serialised.
    #[error("TOML serialise error: {0}")]
    Serialize(String),

    /// A token in a unit vector is not a non-negative integer.
    #[error("invalid unit count '{token}': expected a non-negative integer")]
    InvalidUnits { token: String },

    /// A unit vector was empty.
    #[error("expected at least one unit count")]
    EmptyVector,

    /// A label list does not match the number of resources or consumers.
    #[error("{kind} labels: expected {expected}, found {found}")]
    LabelMismatch {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    /// The matrices do not describe a valid allocation state.
    #[error("invalid allocation state: {0}")]
    State(#[from] StateError),
}
