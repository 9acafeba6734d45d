// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use leftjoin_error::JoinError;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Runs a join to completion, returning every row and the trailing error, if any.
///
/// # Panics
///
/// Panics if a row follows an error: the error must be the last item.
pub fn split_rows<T, I>(rows: I) -> (Vec<T>, Option<JoinError>)
where
    I: IntoIterator<Item = Result<T, JoinError>>,
{
    let mut collected = Vec::new();
    let mut error = None;
    for item in rows {
        assert!(error.is_none(), "join produced an item after its error");
        match item {
            Ok(row) => collected.push(row),
            Err(e) => error = Some(e),
        }
    }
    (collected, error)
}

/// Async counterpart of [`split_rows`].
///
/// # Panics
///
/// Panics if a row follows an error.
pub async fn split_stream_rows<S, T>(stream: &mut S) -> (Vec<T>, Option<JoinError>)
where
    S: Stream<Item = Result<T, JoinError>> + Unpin,
{
    let mut collected = Vec::new();
    let mut error = None;
    while let Some(item) = stream.next().await {
        assert!(error.is_none(), "join produced an item after its error");
        match item {
            Ok(row) => collected.push(row),
            Err(e) => error = Some(e),
        }
    }
    (collected, error)
}

/// Waits up to `timeout_ms` for the next row.
///
/// # Panics
///
/// Panics on timeout, on a join error, or if the stream ended.
pub async fn unwrap_row<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = Result<T, JoinError>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(Ok(row))) => row,
        Ok(Some(Err(e))) => panic!("expected a row, got error: {e}"),
        Ok(None) => panic!("expected a row, stream ended"),
        Err(_) => panic!("expected a row within {timeout_ms}ms"),
    }
}

/// Waits up to `timeout_ms` for the next item and expects it to be an error.
///
/// # Panics
///
/// Panics on timeout, on a row, or if the stream ended.
pub async fn unwrap_error<S, T>(stream: &mut S, timeout_ms: u64) -> JoinError
where
    S: Stream<Item = Result<T, JoinError>> + Unpin,
    T: Debug,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(Err(e))) => e,
        Ok(Some(Ok(row))) => panic!("expected an error, got row: {row:?}"),
        Ok(None) => panic!("expected an error, stream ended"),
        Err(_) => panic!("expected an error within {timeout_ms}ms"),
    }
}

/// Asserts the stream produces nothing for `timeout_ms`.
///
/// # Panics
///
/// Panics if the stream yields an item or ends.
pub async fn assert_no_row_emitted<S>(stream: &mut S, timeout_ms: u64)
where
    S: Stream + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected item emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Asserts the stream reports its end within `timeout_ms`.
///
/// # Panics
///
/// Panics on timeout or if another item arrives.
pub async fn assert_stream_ended<S>(stream: &mut S, timeout_ms: u64)
where
    S: Stream + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("expected the stream to end, got another item"),
        Err(_) => panic!("expected the stream to end within {timeout_ms}ms"),
    }
}
