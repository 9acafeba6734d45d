// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the leftjoin streaming merge-join library
//!
//! A left join over sorted sequences can only fail in two ways: some right
//! input still holds elements once the left input is exhausted
//! ([`UnusedDataError`]), or, when the opt-in order check is enabled, an input
//! turns out not to be sorted ascending by key.
//!
//! # Examples
//!
//! ```
//! use leftjoin_error::{JoinError, UnusedDataError, UnusedInput};
//!
//! let err = JoinError::from(UnusedDataError::new(vec![UnusedInput::new(1, 2)]));
//! assert!(err.is_unused_data());
//! assert_eq!(err.to_string(), "unused data: 2 element(s) left in right 1");
//! ```

use std::fmt::{self, Display};

/// Root error type for all join operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// At least one right input held elements that no left key ever matched.
    ///
    /// Only produced after the left input is exhausted, as the final item of
    /// the row sequence.
    #[error(transparent)]
    UnusedData(#[from] UnusedDataError),

    /// An input produced a key smaller than the key before it.
    ///
    /// Only produced when the join was built with an order check.
    #[error("{side} input is not sorted ascending: element {position} has a smaller key than its predecessor")]
    OutOfOrder {
        /// Which input broke the ordering contract
        side: JoinSide,
        /// Zero-based index of the offending element within that input
        position: usize,
    },
}

impl JoinError {
    /// Create an out-of-order error for the given input and element position
    #[must_use]
    pub const fn out_of_order(side: JoinSide, position: usize) -> Self {
        Self::OutOfOrder { side, position }
    }

    /// Returns `true` if this error reports leftover right elements
    #[must_use]
    pub const fn is_unused_data(&self) -> bool {
        matches!(self, Self::UnusedData(_))
    }

    /// Returns `true` if this error reports an ordering violation
    #[must_use]
    pub const fn is_out_of_order(&self) -> bool {
        matches!(self, Self::OutOfOrder { .. })
    }

    /// Check if this is a recoverable error
    ///
    /// Join errors describe the input data, so retrying the same join with the
    /// same inputs always fails the same way.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }
}

/// Identifies one input of a join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinSide {
    /// The left (driving) input
    Left,
    /// The right input at the given index, in the order the inputs were added
    Right(usize),
}

impl Display for JoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right(index) => write!(f, "right {index}"),
        }
    }
}

/// Leftover elements of a single right input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnusedInput {
    /// Index of the right input, in the order the inputs were added
    pub input: usize,
    /// Number of elements drained from it after the left input ended
    pub count: usize,
}

impl UnusedInput {
    #[must_use]
    pub const fn new(input: usize, count: usize) -> Self {
        Self { input, count }
    }
}

/// Right inputs still held elements when the left input was exhausted.
///
/// Either the right data has keys the left side never mentions, or a right
/// input was not sorted ascending and elements were skipped over.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unused data: {}", describe(.inputs))]
pub struct UnusedDataError {
    inputs: Vec<UnusedInput>,
}

impl UnusedDataError {
    #[must_use]
    pub const fn new(inputs: Vec<UnusedInput>) -> Self {
        Self { inputs }
    }

    /// The right inputs that had leftovers, in input order
    #[must_use]
    pub fn inputs(&self) -> &[UnusedInput] {
        &self.inputs
    }

    /// Total number of unused elements across all right inputs
    #[must_use]
    pub fn total(&self) -> usize {
        self.inputs.iter().map(|unused| unused.count).sum()
    }
}

fn describe(inputs: &[UnusedInput]) -> String {
    inputs
        .iter()
        .map(|unused| {
            format!(
                "{} element(s) left in {}",
                unused.count,
                JoinSide::Right(unused.input)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Specialized Result type for join operations
///
/// # Examples
///
/// ```
/// use leftjoin_error::Result;
///
/// fn rows() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, JoinError>;
