// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::join_input::{BoxedJoinInput, JoinInput};
use crate::join_state::JoinState;
use crate::key_order::{KeyOrder, OrderCheck};
use crate::right_matcher::RightMatcher;
use crate::right_set::{BoxedMatcher, RightSet};
use crate::row::Row;
use core::iter::FusedIterator;
use leftjoin_error::{JoinError, JoinSide, UnusedDataError};

/// Left join whose right inputs form a [`RightSet`].
///
/// This is the driver behind [`LeftJoin`]. Used directly with a tuple of
/// [`RightMatcher`]s it keeps a separate element type per right input and
/// yields `(left, (matches_0, matches_1, ..))`.
///
/// # Examples
///
/// ```
/// use leftjoin_core::{LeftJoinExt, RightMatcher};
///
/// let cities = vec![(1u32, "London"), (2, "Paris")];
/// let museums = vec![(2u32, "Louvre")];
/// let parks = vec![(1u32, 1.42f64), (2, 0.23)];
///
/// let rows = cities
///     .left_join_with(
///         |city: &(u32, &str)| city.0,
///         (
///             RightMatcher::new(museums, |museum: &(u32, &str)| museum.0),
///             RightMatcher::new(parks, |park: &(u32, f64)| park.0),
///         ),
///     )
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// let (paris, (paris_museums, paris_parks)) = &rows[1];
/// assert_eq!(paris.1, "Paris");
/// assert_eq!(paris_museums, &vec![(2, "Louvre")]);
/// assert_eq!(paris_parks, &vec![(2, 0.23)]);
/// ```
pub struct TypedLeftJoin<I, F, K, S>
where
    I: Iterator,
{
    left: I,
    left_key: F,
    left_order: KeyOrder<K>,
    left_pulled: usize,
    rights: S,
    state: JoinState,
}

impl<I, F, K, S> TypedLeftJoin<I, F, K, S>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq,
    S: RightSet<K>,
{
    pub fn new<L>(left: L, left_key: F, rights: S) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            left: left.into_iter(),
            left_key,
            left_order: KeyOrder::unchecked(),
            left_pulled: 0,
            rights,
            state: JoinState::NotStarted,
        }
    }

    /// Verifies that the left input and every right input are sorted
    /// ascending by key. See [`LeftJoin::with_order_check`].
    #[must_use]
    pub fn with_order_check(mut self) -> Self
    where
        K: PartialOrd,
    {
        self.left_order = KeyOrder::ascending();
        self.rights.check_order();
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
        self.rights.arity()
    }

    pub(crate) fn rights_mut(&mut self) -> &mut S {
        &mut self.rights
    }

    fn next_row(&mut self) -> Option<Result<(I::Item, S::Matches), JoinError>> {
        let Some(left) = self.left.next() else {
            return self.drain();
        };

        let key = (self.left_key)(&left);
        let position = self.left_pulled;
        self.left_pulled += 1;

        if !self.left_order.admits(&key) {
            return Some(Err(self.fail(JoinError::out_of_order(JoinSide::Left, position))));
        }

        let matches = match self.rights.collect_matches(&key) {
            Ok(matches) => matches,
            Err(error) => return Some(Err(self.fail(error))),
        };

        self.left_order.retire(key);
        crate::trace!("left join: row {} produced", position);

        Some(Ok((left, matches)))
    }

    fn drain(&mut self) -> Option<Result<(I::Item, S::Matches), JoinError>> {
        self.state = JoinState::Draining;
        crate::debug!(
            "left join: left input exhausted after {} row(s), draining {} right input(s)",
            self.left_pulled,
            self.rights.arity()
        );

        match self.rights.drain_unused() {
            Ok(unused) if unused.is_empty() => {
                self.state = JoinState::Completed;
                crate::debug!("left join: completed");
                None
            }
            Ok(unused) => Some(Err(self.fail(UnusedDataError::new(unused).into()))),
            Err(error) => Some(Err(self.fail(error))),
        }
    }

    fn fail(&mut self, error: JoinError) -> JoinError {
        crate::warn!("left join failed: {}", error);
        self.state = JoinState::Failed;
        error
    }
}

impl<I, F, K, S> Iterator for TypedLeftJoin<I, F, K, S>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq,
    S: RightSet<K>,
{
    type Item = Result<(I::Item, S::Matches), JoinError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            JoinState::NotStarted => {
                crate::debug!(
                    "left join: starting with {} right input(s), order check {:?}",
                    self.rights.arity(),
                    self.order_check()
                );
                self.state = JoinState::Running;
                self.next_row()
            }
            JoinState::Running => self.next_row(),
            JoinState::Draining => self.drain(),
            JoinState::Completed | JoinState::Failed => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_terminal() {
            return (0, Some(0));
        }
        let (lower, upper) = self.left.size_hint();
        // a checked join may stop at its first item
        let lower = match self.left_order.mode() {
            OrderCheck::Unchecked => lower,
            OrderCheck::Ascending => lower.min(1),
        };
        // one more item for a trailing error
        (lower, upper.and_then(|upper| upper.checked_add(1)))
    }
}

impl<I, F, K, S> FusedIterator for TypedLeftJoin<I, F, K, S>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq,
    S: RightSet<K>,
{
}

/// Streaming left join of one key-sorted left input against any number of
/// key-sorted right inputs.
///
/// `LeftJoin` is an iterator of `Result<Row<L, R>, JoinError>`. It pulls one
/// left element per row and, for every right input in the order the inputs
/// were added, collects the right elements carrying the same key. Each right
/// input is consumed strictly forward with at most one element of lookahead,
/// so memory use does not grow with the inputs.
///
/// Once the left input is exhausted, every right input is drained. If any
/// right element was never matched the last item is
/// `Err(JoinError::UnusedData(..))`; the check only happens for consumers
/// that iterate to the end.
///
/// Only the first of several consecutive left elements with the same key
/// receives the matching right elements. Later duplicates get empty lists,
/// because right inputs are never rewound.
///
/// All right inputs share the element type `R`. For a separate element type
/// per input use [`TypedLeftJoin`].
///
/// # Examples
///
/// ```
/// use leftjoin_core::LeftJoin;
///
/// let cities = vec![(1, "London"), (2, "Paris")];
/// let museums = vec![(1, "Science Museum"), (2, "Louvre"), (2, "Orsay")];
///
/// let rows: Vec<_> = LeftJoin::new(cities, |city: &(u32, &str)| city.0)
///     .with_right(museums, |museum: &(u32, &str)| museum.0)
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(rows[0].matches_for(0), Some(&[(1, "Science Museum")][..]));
/// assert_eq!(rows[1].matches_for(0).map(<[_]>::len), Some(2));
/// ```
pub struct LeftJoin<'a, I, F, K, R>
where
    I: Iterator,
{
    inner: TypedLeftJoin<I, F, K, Vec<BoxedMatcher<'a, R, K>>>,
    order_check: Option<fn() -> KeyOrder<K>>,
}

impl<'a, I, F, K, R> LeftJoin<'a, I, F, K, R>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + 'a,
    R: 'a,
{
    /// Starts a join driven by `left`, without any right inputs yet.
    pub fn new<S>(left: S, left_key: F) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: TypedLeftJoin::new(left, left_key, Vec::new()),
            order_check: None,
        }
    }

    /// Adds a right input. Match lists appear in rows in the order the right
    /// inputs were added.
    #[must_use]
    pub fn with_right<S, G>(self, right: S, key: G) -> Self
    where
        S: IntoIterator<Item = R>,
        S::IntoIter: 'a,
        G: Fn(&R) -> K + 'a,
    {
        self.with_input(JoinInput::boxed(right, key))
    }

    /// Adds an already boxed right input.
    #[must_use]
    pub fn with_input(mut self, input: BoxedJoinInput<'a, R, K>) -> Self {
        let mut matcher = RightMatcher::new(input.sequence, input.key);
        if let Some(order) = self.order_check {
            matcher.set_order(order());
        }
        self.inner.rights_mut().push(matcher);
        self
    }

    /// Verifies that the left input and every right input are sorted
    /// ascending by key.
    ///
    /// A decreasing key ends the join with [`JoinError::OutOfOrder`] instead
    /// of silently producing wrong match lists. Equal consecutive keys are
    /// allowed. Applies to right inputs added before and after this call.
    #[must_use]
    pub fn with_order_check(mut self) -> Self
    where
        K: PartialOrd,
    {
        self.order_check = Some(KeyOrder::ascending);
        self.inner = self.inner.with_order_check();
        self
    }

    #[must_use]
    pub const fn state(&self) -> JoinState {
        self.inner.state()
    }

    #[must_use]
    pub const fn order_check(&self) -> OrderCheck {
        self.inner.order_check()
    }

    /// Number of right inputs, which is also the number of match lists per row.
    #[must_use]
    pub fn right_count(&self) -> usize {
        self.inner.right_count()
    }
}

impl<'a, I, F, K, R> Iterator for LeftJoin<'a, I, F, K, R>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + 'a,
    R: 'a,
{
    type Item = Result<Row<I::Item, R>, JoinError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|item| item.map(|(left, matches)| Row::new(left, matches)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, I, F, K, R> FusedIterator for LeftJoin<'a, I, F, K, R>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: PartialEq + 'a,
    R: 'a,
{
}

/// Joins `left` against `rights`, in the order the right inputs are given.
///
/// Equivalent to [`LeftJoin::new`] followed by [`LeftJoin::with_input`] for
/// each right input.
///
/// # Examples
///
/// ```
/// use leftjoin_core::{left_join, JoinInput};
///
/// let rows = left_join(
///     JoinInput::new(vec![1u32, 2], |n: &u32| *n),
///     vec![
///         JoinInput::boxed(vec![(1u32, 'A')], |r: &(u32, char)| r.0),
///         JoinInput::boxed(vec![(1u32, 'X'), (2, 'Y')], |r: &(u32, char)| r.0),
///     ],
/// )
/// .collect::<Result<Vec<_>, _>>()
/// .unwrap();
///
/// assert_eq!(rows[1].matches(), &[vec![], vec![(2, 'Y')]]);
/// ```
pub fn left_join<'a, S, F, K, R, RS>(
    left: JoinInput<S, F>,
    rights: RS,
) -> LeftJoin<'a, S::IntoIter, F, K, R>
where
    S: IntoIterator,
    F: Fn(&S::Item) -> K,
    K: PartialEq + 'a,
    R: 'a,
    RS: IntoIterator<Item = BoxedJoinInput<'a, R, K>>,
{
    rights
        .into_iter()
        .fold(LeftJoin::new(left.sequence, left.key), LeftJoin::with_input)
}

/// Extension trait starting a left join from any iterable.
pub trait LeftJoinExt: IntoIterator + Sized {
    /// Uses `self` as the left input of a join keyed by `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftjoin_core::LeftJoinExt;
    ///
    /// let mut rows = vec![1u32, 2, 3]
    ///     .left_join_by(|n: &u32| *n)
    ///     .with_right(vec![2u32, 3, 3], |n: &u32| *n);
    ///
    /// assert!(rows.next().unwrap().unwrap().is_unmatched());
    /// assert_eq!(rows.next().unwrap().unwrap().matches_for(0), Some(&[2][..]));
    /// assert_eq!(rows.next().unwrap().unwrap().matches_for(0), Some(&[3, 3][..]));
    /// assert!(rows.next().is_none());
    /// ```
    fn left_join_by<'a, F, K, R>(self, key: F) -> LeftJoin<'a, Self::IntoIter, F, K, R>
    where
        F: Fn(&Self::Item) -> K,
        K: PartialEq + 'a,
        R: 'a,
    {
        LeftJoin::new(self, key)
    }

    /// Uses `self` as the left input of a join against `rights`, a tuple of
    /// [`RightMatcher`]s that may each have their own element type.
    fn left_join_with<F, K, S>(self, key: F, rights: S) -> TypedLeftJoin<Self::IntoIter, F, K, S>
    where
        F: Fn(&Self::Item) -> K,
        K: PartialEq,
        S: RightSet<K>,
    {
        TypedLeftJoin::new(self, key, rights)
    }
}

impl<T: IntoIterator> LeftJoinExt for T {}
