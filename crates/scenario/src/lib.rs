// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # scenario
//!
//! Input handling for the allocator: scenario files describing the initial
//! allocation state, and parsing of unit vectors typed by a user.
//!
//! The allocator core only ever sees typed vectors. Everything textual
//! (TOML, whitespace-separated integers, display labels) is resolved here.
//!
//! # Example
//! ```
//! use scenario::ScenarioConfig;
//!
//! let config = ScenarioConfig::from_toml(r#"
//! name = "ward"
//! total = [2]
//! max_demand = [[2], [1]]
//! allocated = [[1], [0]]
//! consumer_names = ["icu", "er"]
//! "#).unwrap();
//!
//! let state = config.build().unwrap();
//! assert_eq!(state.num_consumers(), 2);
//! assert_eq!(config.consumer_label(0), "icu");
//! ```

mod config;
mod error;
mod parse;

pub use config::{ScenarioConfig, ScriptedRequest};
pub use error::ScenarioError;
pub use parse::parse_units;
