// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Adapters that count how many elements a join actually pulled.

use futures::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Shared count of elements produced by a wrapped source.
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Arc<AtomicUsize>);

impl PullCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Iterator wrapper incrementing a [`PullCounter`] for every element produced.
#[derive(Debug)]
pub struct CountingIter<I> {
    inner: I,
    counter: PullCounter,
}

impl<I> CountingIter<I> {
    pub fn new<S>(source: S, counter: PullCounter) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: source.into_iter(),
            counter,
        }
    }
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.counter.increment();
        }
        item
    }
}

/// Stream wrapper incrementing a [`PullCounter`] for every element produced.
#[derive(Debug)]
pub struct CountingStream<S> {
    inner: S,
    counter: PullCounter,
}

impl<S> CountingStream<S> {
    pub const fn new(inner: S, counter: PullCounter) -> Self {
        Self { inner, counter }
    }
}

impl<S: Stream + Unpin> Stream for CountingStream<S> {
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let poll = Pin::new(&mut self.inner).poll_next(cx);
        if let Poll::Ready(Some(_)) = &poll {
            self.counter.increment();
        }
        poll
    }
}

/// Wraps `source` in a [`CountingIter`] and returns it with its counter.
pub fn counted<S: IntoIterator>(source: S) -> (CountingIter<S::IntoIter>, PullCounter) {
    let counter = PullCounter::new();
    (CountingIter::new(source, counter.clone()), counter)
}

/// Wraps `stream` in a [`CountingStream`] and returns it with its counter.
pub fn counted_stream<S: Stream + Unpin>(stream: S) -> (CountingStream<S>, PullCounter) {
    let counter = PullCounter::new();
    (CountingStream::new(stream, counter.clone()), counter)
}
