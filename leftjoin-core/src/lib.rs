// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Streaming multi-way left join over key-sorted iterators.
//!
//! The join is driven by a left input. For every left element it collects, from
//! each right input, the elements sharing the left element's key. All inputs
//! must already be sorted ascending by key; each one is consumed strictly
//! forward, once, with at most one element of lookahead per right input.
//!
//! After the left input ends the right inputs are drained, and any element
//! that was never matched turns the final item of the row sequence into
//! [`JoinError::UnusedData`].
//!
//! # Building blocks
//!
//! - [`RightMatcher`] - lazily yields the right elements matching a
//!   [`MatchRequest`], buffering one element in a [`Lookahead`]
//! - [`LeftJoin`] - the row iterator composing one matcher per right input
//! - [`TypedLeftJoin`] / [`RightSet`] - the same join over a tuple of
//!   matchers, each right input keeping its own element type
//! - [`JoinState`] - the explicit lifecycle of a join
//! - [`KeyOrder`] / [`OrderCheck`] - opt-in ascending-order verification

mod logging;

pub mod join_input;
pub mod join_state;
pub mod key_order;
pub mod left_join;
pub mod lookahead;
pub mod match_request;
pub mod right_matcher;
pub mod right_set;
pub mod row;

pub use self::join_input::{BoxedJoinInput, BoxedKey, BoxedSequence, JoinInput};
pub use self::join_state::JoinState;
pub use self::key_order::{KeyOrder, OrderCheck};
pub use self::left_join::{left_join, LeftJoin, LeftJoinExt, TypedLeftJoin};
pub use self::lookahead::Lookahead;
pub use self::match_request::MatchRequest;
pub use self::right_matcher::{Matches, RightMatcher};
pub use self::right_set::{BoxedMatcher, RightSet};
pub use self::row::Row;
pub use leftjoin_error::{JoinError, JoinSide, Result, UnusedDataError, UnusedInput};
