// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the leftjoin workspace.
//!
//! # Fixtures
//!
//! - `City`, `Museum`, `Park` - the cities/attractions data set, keyed by `city_id`
//! - `Attraction` - museums and parks as one right-side element type
//! - `Record` - a bare `{id, value}` element for small scenarios
//!
//! # Pull counting
//!
//! [`counting::counted`] and [`counting::counted_stream`] wrap a source and
//! report how many elements were actually pulled from it, which is how tests
//! observe the join's bounded lookahead.
//!
//! ```rust
//! use leftjoin_test_utils::counting::counted;
//!
//! let (mut source, pulls) = counted(vec![1, 2, 3]);
//! source.next();
//! assert_eq!(pulls.get(), 1);
//! ```
//!
//! # Channels
//!
//! [`test_channel`] gives an unbounded sender plus a stream, for tests that
//! push elements into a running asynchronous join.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod city;
pub mod counting;
pub mod helpers;
pub mod museum;
pub mod park;
pub mod record;
pub mod test_data;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use city::City;
pub use counting::{counted, counted_stream, CountingIter, CountingStream, PullCounter};
pub use helpers::{
    assert_no_row_emitted, assert_stream_ended, split_rows, split_stream_rows, unwrap_error,
    unwrap_row,
};
pub use museum::Museum;
pub use park::Park;
pub use record::{key, record, Record};
pub use test_data::Attraction;

/// Creates an unbounded channel whose receiving half is a `Stream`.
///
/// # Example
///
/// ```rust
/// use leftjoin_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
/// tx.send(1).unwrap();
/// assert_eq!(stream.next().await, Some(1));
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send + Unpin + 'static,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
