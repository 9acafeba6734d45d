// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # leftjoin
//!
//! Streaming multi-way left join over sequences that are already sorted by key.
//!
//! ## Overview
//!
//! A join has one left input and any number of right inputs. Every left
//! element becomes one [`Row`] holding, per right input, the right elements
//! with the same key. Inputs are consumed strictly forward with at most one
//! element of lookahead per right input, so joins over unbounded or very
//! large inputs run in constant memory.
//!
//! Right elements that no left element claimed are not dropped silently:
//! once everything has been read the join ends with
//! [`JoinError::UnusedData`], reporting how many elements each right input
//! had left over.
//!
//! - [`LeftJoin`] joins iterators
//! - [`TypedLeftJoin`] joins iterators against a tuple of [`RightMatcher`]s,
//!   each right input keeping its own element type
//! - [`LeftJoinStream`] joins `futures::Stream`s (feature `stream`, on by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use leftjoin::prelude::*;
//!
//! let cities = vec![(1, "London"), (2, "Paris"), (3, "Rome")];
//! let museums = vec![(1, "British Museum"), (2, "Louvre"), (2, "Orsay")];
//! let parks = vec![(1, "Hyde Park"), (3, "Villa Borghese")];
//!
//! let key = |entry: &(u32, &str)| entry.0;
//! let rows = cities
//!     .left_join_by(key)
//!     .with_right(museums, key)
//!     .with_right(parks, key)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(rows[1].matches()[0].len(), 2);
//! assert!(rows[2].matches()[0].is_empty());
//! assert_eq!(rows[2].matches()[1], vec![(3, "Villa Borghese")]);
//! ```
//!
//! ## Checking the sort order
//!
//! Inputs are trusted to be sorted. Call `with_order_check()` to have a
//! decreasing key end the join with [`JoinError::OutOfOrder`] instead.

pub use leftjoin_core::{
    left_join, BoxedJoinInput, JoinInput, JoinState, LeftJoin, LeftJoinExt, MatchRequest,
    OrderCheck, RightMatcher, RightSet, Row, TypedLeftJoin,
};
pub use leftjoin_error::{JoinError, JoinSide, Result, UnusedDataError, UnusedInput};

#[cfg(feature = "stream")]
pub use leftjoin_stream::{LeftJoinStream, LeftJoinStreamExt, StreamRightMatcher};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{JoinError, JoinState, LeftJoin, LeftJoinExt, RightMatcher, Row};

    #[cfg(feature = "stream")]
    pub use crate::{LeftJoinStream, LeftJoinStreamExt};
}
