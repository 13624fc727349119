// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scenario configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! name = "hospital"
//! total = [3, 3, 2]
//! max_demand = [[7, 5, 3], [3, 2, 2]]
//! allocated = [[0, 1, 0], [2, 0, 0]]
//! resource_names = ["beds", "ventilators", "nurses"]
//! consumer_names = ["icu", "emergency"]
//!
//! [[requests]]
//! consumer = 1
//! units = [1, 0, 2]
//! ```
//!
//! Only `total`, `max_demand` and `allocated` are required.

use crate::ScenarioError;
use allocation_state::AllocationState;
use std::path::Path;

/// A scripted request replayed against the scenario's state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScriptedRequest {
    /// Index of the requesting consumer.
    pub consumer: usize,
    /// Units requested per resource kind.
    pub units: Vec<u32>,
}

/// A complete allocation scenario: the initial vectors plus optional labels
/// and a request script.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScenarioConfig {
    /// Human-readable scenario name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Available units per resource kind.
    pub total: Vec<u32>,
    /// Declared maximum demand, one row per consumer.
    pub max_demand: Vec<Vec<u32>>,
    /// Current allocation, one row per consumer.
    pub allocated: Vec<Vec<u32>>,
    /// Optional display names for resource kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_names: Vec<String>,
    /// Optional display names for consumers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumer_names: Vec<String>,
    /// Requests to replay in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<ScriptedRequest>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl ScenarioConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(
            "loaded scenario '{}' from {}: {} consumers, {} resources",
            config.name,
            path.display(),
            config.max_demand.len(),
            config.total.len(),
        );
        Ok(config)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ScenarioError> {
        toml::from_str(toml_str).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Serialises the scenario to TOML.
    pub fn to_toml(&self) -> Result<String, ScenarioError> {
        toml::to_string_pretty(self).map_err(|e| ScenarioError::Serialize(e.to_string()))
    }

    /// Validates labels and builds the initial [`AllocationState`].
    ///
    /// Label lists are optional, but when present must have one entry per
    /// resource kind or consumer.
    pub fn build(&self) -> Result<AllocationState, ScenarioError> {
        check_labels("resource", &self.resource_names, self.total.len())?;
        check_labels("consumer", &self.consumer_names, self.max_demand.len())?;

        let state = AllocationState::new(
            self.total.clone(),
            self.max_demand.clone(),
            self.allocated.clone(),
        )?;

        for i in 0..state.num_consumers() {
            if state.need(i).iter().any(|&n| n < 0) {
                tracing::warn!(
                    "{} holds more than its declared maximum; it will be treated as able to finish",
                    self.consumer_label(i),
                );
            }
        }

        Ok(state)
    }

    /// Display name of resource kind `j`, falling back to `R{j}`.
    pub fn resource_label(&self, j: usize) -> String {
        self.resource_names
            .get(j)
            .cloned()
            .unwrap_or_else(|| format!("R{j}"))
    }

    /// Display name of consumer `i`, falling back to `C{i}`.
    pub fn consumer_label(&self, i: usize) -> String {
        self.consumer_names
            .get(i)
            .cloned()
            .unwrap_or_else(|| format!("C{i}"))
    }
}

fn check_labels(
    kind: &'static str,
    labels: &[String],
    expected: usize,
) -> Result<(), ScenarioError> {
    if !labels.is_empty() && labels.len() != expected {
        return Err(ScenarioError::LabelMismatch {
            kind,
            expected,
            found: labels.len(),
        });
    }
    Ok(())
}

impl Default for ScenarioConfig {
    /// The classic five-consumer, three-resource textbook example.
    fn default() -> Self {
        Self {
            name: "classic".to_string(),
            total: vec![3, 3, 2],
            max_demand: vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
            allocated: vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            resource_names: Vec::new(),
            consumer_names: Vec::new(),
            requests: vec![
                ScriptedRequest {
                    consumer: 1,
                    units: vec![1, 0, 2],
                },
                ScriptedRequest {
                    consumer: 4,
                    units: vec![3, 3, 0],
                },
                ScriptedRequest {
                    consumer: 0,
                    units: vec![0, 2, 0],
                },
            ],
        }
    }
}
