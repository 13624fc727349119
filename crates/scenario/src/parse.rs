// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Parsing of whitespace-separated unit vectors typed by a user.

use crate::ScenarioError;

/// Parses a whitespace-separated list of non-negative integers, e.g.
/// `"1 0 2"`.
///
/// Negative numbers, fractions and other non-integer tokens are rejected
/// with [`ScenarioError::InvalidUnits`]; blank input is
/// [`ScenarioError::EmptyVector`].
///
/// # Examples
/// ```
/// assert_eq!(scenario::parse_units("1 0 2").unwrap(), vec![1, 0, 2]);
/// assert!(scenario::parse_units("1 -2").is_err());
/// ```
pub fn parse_units(input: &str) -> Result<Vec<u32>, ScenarioError> {
    let units = input
        .split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| ScenarioError::InvalidUnits {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if units.is_empty() {
        return Err(ScenarioError::EmptyVector);
    }
    Ok(units)
}
