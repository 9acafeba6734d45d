// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::future::poll_fn;
use futures::{ready, Stream};
use leftjoin_core::{KeyOrder, Lookahead, MatchRequest};

/// Type-erased right stream.
pub type BoxedStream<'a, E> = Pin<Box<dyn Stream<Item = E> + Send + 'a>>;

/// Type-erased key extractor that can travel with the stream across tasks.
pub type SendKey<'a, E, K> = Box<dyn Fn(&E) -> K + Send + 'a>;

/// Asynchronous counterpart of [`leftjoin_core::RightMatcher`].
///
/// Matching follows the same single-element lookahead rules. Results are
/// appended to a caller-owned buffer, so a `Poll::Pending` from the
/// underlying stream loses nothing: polling again with the same request and
/// buffer continues where the previous poll stopped.
pub struct StreamRightMatcher<'a, K, E> {
    source: BoxedStream<'a, E>,
    key: SendKey<'a, E, K>,
    lookahead: Lookahead<K, E>,
}

impl<'a, K, E> StreamRightMatcher<'a, K, E>
where
    K: PartialEq,
{
    pub fn new<S, F>(source: S, key: F) -> Self
    where
        S: Stream<Item = E> + Send + 'a,
        F: Fn(&E) -> K + Send + 'a,
    {
        Self {
            source: Box::pin(source),
            key: Box::new(key),
            lookahead: Lookahead::new(KeyOrder::unchecked()),
        }
    }

    /// Appends to `out` every element satisfying `request`, until an element
    /// does not match or the stream ends.
    pub fn poll_matches(
        &mut self,
        cx: &mut Context<'_>,
        request: MatchRequest<'_, K>,
        out: &mut Vec<E>,
    ) -> Poll<()> {
        loop {
            if self.lookahead.needs_pull() {
                let pulled = ready!(self.source.as_mut().poll_next(cx));
                self.lookahead.fill(pulled, &self.key);
            }
            match self.lookahead.take_if(request) {
                Some(element) => out.push(element),
                None => return Poll::Ready(()),
            }
        }
    }

    /// Consumes everything left in the stream, adding the number of consumed
    /// elements to `drained`.
    pub fn poll_drain(&mut self, cx: &mut Context<'_>, drained: &mut usize) -> Poll<()> {
        loop {
            if self.lookahead.needs_pull() {
                let pulled = ready!(self.source.as_mut().poll_next(cx));
                self.lookahead.fill(pulled, &self.key);
            }
            match self.lookahead.take_if(MatchRequest::MatchAll) {
                Some(_) => *drained += 1,
                None => return Poll::Ready(()),
            }
        }
    }

    /// Collects the elements satisfying `request`.
    ///
    /// Elements matched before the returned future is dropped are lost. Use
    /// [`Self::poll_matches`] with a buffer that outlives the poll when the
    /// call may be cancelled.
    pub async fn matches(&mut self, request: MatchRequest<'_, K>) -> Vec<E> {
        let mut out = Vec::new();
        poll_fn(|cx| self.poll_matches(cx, request, &mut out)).await;
        out
    }

    /// Consumes everything left and returns how many elements that was.
    pub async fn drain(&mut self) -> usize {
        let mut drained = 0;
        poll_fn(|cx| self.poll_drain(cx, &mut drained)).await;
        drained
    }

    pub(crate) fn set_order(&mut self, order: KeyOrder<K>) {
        self.lookahead.set_order(order);
    }

    /// Position of the first element that broke the ascending order, if the
    /// matcher is checked.
    #[must_use]
    pub const fn violation(&self) -> Option<usize> {
        self.lookahead.violation()
    }

    /// Number of elements pulled from the stream so far.
    #[must_use]
    pub const fn pulled(&self) -> usize {
        self.lookahead.pulled()
    }

    /// Returns `true` once the stream has reported its end.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.lookahead.is_exhausted()
    }
}
