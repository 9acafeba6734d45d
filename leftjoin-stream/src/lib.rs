// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Asynchronous streaming left join over key-sorted streams.
//!
//! [`LeftJoinStream`] is the `Stream` counterpart of
//! [`leftjoin_core::LeftJoin`]. It joins one left stream against any number
//! of right streams using the same matching rules, lookahead and
//! unused-data check, and it is safe to poll from any executor: every input
//! may return `Poll::Pending` in the middle of a row.
//!
//! ```
//! use futures::{executor::block_on, stream, StreamExt};
//! use leftjoin_stream::LeftJoinStreamExt;
//!
//! let rows: Vec<_> = block_on(
//!     stream::iter(vec![1u32, 2])
//!         .left_join_by(|n: &u32| *n)
//!         .with_right(stream::iter(vec![2u32, 3]), |n: &u32| *n)
//!         .collect(),
//! );
//!
//! assert_eq!(rows.len(), 3);
//! assert!(rows[2].as_ref().unwrap_err().is_unused_data());
//! ```

mod logging;

pub mod left_join_stream;
pub mod stream_right_matcher;

pub use self::left_join_stream::{LeftJoinStream, LeftJoinStreamExt};
pub use self::stream_right_matcher::{BoxedStream, SendKey, StreamRightMatcher};
pub use leftjoin_core::{JoinState, MatchRequest, OrderCheck, Row};
pub use leftjoin_error::{JoinError, JoinSide, UnusedDataError, UnusedInput};
