// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::stream_right_matcher::StreamRightMatcher;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{self, FusedStream};
use futures::{ready, Stream};
use leftjoin_core::{JoinState, KeyOrder, MatchRequest, OrderCheck, Row};
use leftjoin_error::{JoinError, JoinSide, UnusedDataError, UnusedInput};
use pin_project::pin_project;

type JoinItem<L, R> = Result<Row<L, R>, JoinError>;

/// A left element whose match lists are still being collected.
///
/// `matches.len()` is the index of the right input currently being read and
/// `current` holds what that input produced before it returned `Pending`.
struct PendingRow<L, K, R> {
    left: L,
    key: K,
    position: usize,
    matches: Vec<Vec<R>>,
    current: Vec<R>,
}

impl<L, K, R> PendingRow<L, K, R>
where
    K: PartialEq,
{
    fn new(left: L, key: K, position: usize, rights: usize) -> Self {
        Self {
            left,
            key,
            position,
            matches: Vec::with_capacity(rights),
            current: Vec::new(),
        }
    }

    fn poll_fill(
        &mut self,
        cx: &mut Context<'_>,
        rights: &mut [StreamRightMatcher<'_, K, R>],
    ) -> Poll<Result<(), JoinError>> {
        while let Some(matcher) = rights.get_mut(self.matches.len()) {
            let index = self.matches.len();
            ready!(matcher.poll_matches(cx, MatchRequest::MatchKey(&self.key), &mut self.current));

            if let Some(position) = matcher.violation() {
                return Poll::Ready(Err(JoinError::out_of_order(
                    JoinSide::Right(index),
                    position,
                )));
            }
            self.matches.push(mem::take(&mut self.current));
        }
        Poll::Ready(Ok(()))
    }
}

/// Progress through the right inputs once the left stream has ended.
#[derive(Default)]
struct Drain {
    cursor: usize,
    count: usize,
    unused: Vec<UnusedInput>,
}

/// Asynchronous left join of one key-sorted left stream against any number
/// of key-sorted right streams.
///
/// Yields `Result<Row<L, R>, JoinError>` with the same rules as
/// [`leftjoin_core::LeftJoin`]: one row per left element, match lists in the
/// order the right inputs were added, empty lists for repeated left keys, and
/// a final `Err(JoinError::UnusedData(..))` when right elements were never
/// matched.
///
/// Every input may return `Poll::Pending` at any point. The row being built
/// is kept across polls, so no element is lost or pulled twice.
///
/// # Examples
///
/// ```
/// use futures::{executor::block_on, stream, TryStreamExt};
/// use leftjoin_stream::LeftJoinStream;
///
/// let cities = stream::iter(vec![(1u32, "London"), (2, "Paris")]);
/// let museums = stream::iter(vec![(2u32, "Louvre")]);
///
/// let rows: Vec<_> = block_on(
///     LeftJoinStream::new(cities, |city: &(u32, &str)| city.0)
///         .with_right(museums, |museum: &(u32, &str)| museum.0)
///         .try_collect(),
/// )
/// .unwrap();
///
/// assert!(rows[0].is_unmatched());
/// assert_eq!(rows[1].matches_for(0), Some(&[(2, "Louvre")][..]));
/// ```
#[pin_project]
pub struct LeftJoinStream<'a, S, F, K, R>
where
    S: Stream,
{
    #[pin]
    left: S,
    left_key: F,
    left_order: KeyOrder<K>,
    left_pulled: usize,
    rights: Vec<StreamRightMatcher<'a, K, R>>,
    order_check: Option<fn() -> KeyOrder<K>>,
    pending: Option<PendingRow<S::Item, K, R>>,
    drain: Drain,
    state: JoinState,
}

impl<'a, S, F, K, R> LeftJoinStream<'a, S, F, K, R>
where
    S: Stream,
    F: Fn(&S::Item) -> K,
    K: PartialEq + 'a,
    R: 'a,
{
    /// Starts a join driven by `left`, without any right inputs yet.
    pub fn new(left: S, left_key: F) -> Self {
        Self {
            left,
            left_key,
            left_order: KeyOrder::unchecked(),
            left_pulled: 0,
            rights: Vec::new(),
            order_check: None,
            pending: None,
            drain: Drain::default(),
            state: JoinState::NotStarted,
        }
    }

    /// Adds a right stream. Match lists appear in rows in the order the right
    /// inputs were added.
    #[must_use]
    pub fn with_right<T, G>(mut self, right: T, key: G) -> Self
    where
        T: Stream<Item = R> + Send + 'a,
        G: Fn(&R) -> K + Send + 'a,
    {
        let mut matcher = StreamRightMatcher::new(right, key);
        if let Some(order) = self.order_check {
            matcher.set_order(order());
        }
        self.rights.push(matcher);
        self
    }

    /// Adds an in-memory right input, which never returns `Pending`.
    #[must_use]
    pub fn with_right_iter<T, G>(self, right: T, key: G) -> Self
    where
        T: IntoIterator<Item = R>,
        T::IntoIter: Send + 'a,
        G: Fn(&R) -> K + Send + 'a,
    {
        self.with_right(stream::iter(right), key)
    }

    /// Verifies that the left stream and every right stream are sorted
    /// ascending by key. See [`leftjoin_core::LeftJoin::with_order_check`].
    #[must_use]
    pub fn with_order_check(mut self) -> Self
    where
        K: PartialOrd,
    {
        self.order_check = Some(KeyOrder::ascending);
        self.left_order = KeyOrder::ascending();
        for matcher in &mut self.rights {
            matcher.set_order(KeyOrder::ascending());
        }
        self
    }

    #[must_use]
    pub const fn state(&self) -> JoinState {
        self.state
    }

    #[must_use]
    pub const fn order_check(&self) -> OrderCheck {
        self.left_order.mode()
    }

    #[must_use]
    pub fn right_count(&self) -> usize {
        self.rights.len()
    }
}

fn fail<T>(state: &mut JoinState, error: JoinError) -> Poll<Option<Result<T, JoinError>>> {
    crate::warn!("left join stream failed: {}", error);
    *state = JoinState::Failed;
    Poll::Ready(Some(Err(error)))
}

impl<'a, S, F, K, R> Stream for LeftJoinStream<'a, S, F, K, R>
where
    S: Stream,
    F: Fn(&S::Item) -> K,
    K: PartialEq + 'a,
    R: 'a,
{
    type Item = JoinItem<S::Item, R>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            match *this.state {
                JoinState::NotStarted => {
                    crate::debug!(
                        "left join stream: starting with {} right input(s), order check {:?}",
                        this.rights.len(),
                        this.left_order.mode()
                    );
                    *this.state = JoinState::Running;
                }
                JoinState::Running => {
                    let Some(mut pending) = this.pending.take() else {
                        match ready!(this.left.as_mut().poll_next(cx)) {
                            Some(left) => {
                                let key = (this.left_key)(&left);
                                let position = *this.left_pulled;
                                *this.left_pulled += 1;

                                if !this.left_order.admits(&key) {
                                    return fail(
                                        this.state,
                                        JoinError::out_of_order(JoinSide::Left, position),
                                    );
                                }
                                *this.pending = Some(PendingRow::new(
                                    left,
                                    key,
                                    position,
                                    this.rights.len(),
                                ));
                            }
                            None => {
                                crate::debug!(
                                    "left join stream: left input exhausted after {} row(s), draining {} right input(s)",
                                    this.left_pulled,
                                    this.rights.len()
                                );
                                *this.state = JoinState::Draining;
                            }
                        }
                        continue;
                    };

                    match pending.poll_fill(cx, this.rights) {
                        Poll::Pending => {
                            *this.pending = Some(pending);
                            return Poll::Pending;
                        }
                        Poll::Ready(Err(error)) => return fail(this.state, error),
                        Poll::Ready(Ok(())) => {
                            this.left_order.retire(pending.key);
                            crate::trace!(
                                "left join stream: row {} matched {} right element(s)",
                                pending.position,
                                pending.matches.iter().map(Vec::len).sum::<usize>()
                            );
                            return Poll::Ready(Some(Ok(Row::new(pending.left, pending.matches))));
                        }
                    }
                }
                JoinState::Draining => {
                    let drain = &mut *this.drain;
                    while let Some(matcher) = this.rights.get_mut(drain.cursor) {
                        ready!(matcher.poll_drain(cx, &mut drain.count));
                        if drain.count > 0 {
                            drain.unused.push(UnusedInput::new(drain.cursor, drain.count));
                        }
                        drain.count = 0;
                        drain.cursor += 1;
                    }

                    let violation = this.rights.iter().enumerate().find_map(|(index, matcher)| {
                        matcher
                            .violation()
                            .map(|position| JoinError::out_of_order(JoinSide::Right(index), position))
                    });
                    if let Some(error) = violation {
                        return fail(this.state, error);
                    }

                    if drain.unused.is_empty() {
                        crate::debug!("left join stream: completed");
                        *this.state = JoinState::Completed;
                        return Poll::Ready(None);
                    }
                    let unused = mem::take(&mut drain.unused);
                    return fail(this.state, UnusedDataError::new(unused).into());
                }
                JoinState::Completed | JoinState::Failed => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_terminal() {
            return (0, Some(0));
        }
        let pending = usize::from(self.pending.is_some());
        let (lower, upper) = self.left.size_hint();
        let lower = lower.saturating_add(pending);
        // a checked join may stop at its next item
        let lower = match self.left_order.mode() {
            OrderCheck::Unchecked => lower,
            OrderCheck::Ascending => lower.min(1),
        };
        let upper = upper.and_then(|upper| upper.checked_add(pending + 1));
        (lower, upper)
    }
}

impl<'a, S, F, K, R> FusedStream for LeftJoinStream<'a, S, F, K, R>
where
    S: Stream,
    F: Fn(&S::Item) -> K,
    K: PartialEq + 'a,
    R: 'a,
{
    fn is_terminated(&self) -> bool {
        self.state.is_terminal()
    }
}

/// Extension trait starting a left join from any stream.
pub trait LeftJoinStreamExt: Stream + Sized {
    /// Uses `self` as the left input of a join keyed by `key`.
    fn left_join_by<'a, F, K, R>(self, key: F) -> LeftJoinStream<'a, Self, F, K, R>
    where
        F: Fn(&Self::Item) -> K,
        K: PartialEq + 'a,
        R: 'a,
    {
        LeftJoinStream::new(self, key)
    }
}

impl<S: Stream> LeftJoinStreamExt for S {}
