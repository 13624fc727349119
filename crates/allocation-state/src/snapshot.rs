// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Read-only projection of an [`AllocationState`](crate::AllocationState)
//! for display.

use crate::Units;

/// A point-in-time copy of available units, per-consumer allocation, and
/// per-consumer need.
///
/// Snapshots carry no logic; they exist so a presentation layer can render
/// the state without borrowing it, and so two states can be compared
/// element-wise.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllocationSnapshot {
    /// Available units per resource kind.
    pub total: Vec<Units>,
    /// Units held, one row per consumer.
    pub allocated: Vec<Vec<Units>>,
    /// Remaining need, one row per consumer.
    pub need: Vec<Vec<Units>>,
}

impl AllocationSnapshot {
    /// Number of consumers in the snapshot.
    pub fn num_consumers(&self) -> usize {
        self.allocated.len()
    }

    /// Number of resource kinds in the snapshot.
    pub fn num_resources(&self) -> usize {
        self.total.len()
    }

    /// Returns a compact one-line summary, e.g.
    /// `"5 consumers × 3 resources, available [3, 3, 2]"`.
    pub fn summary(&self) -> String {
        format!(
            "{} consumers × {} resources, available {:?}",
            self.num_consumers(),
            self.num_resources(),
            self.total,
        )
    }
}
