// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::key_order::KeyOrder;
use crate::lookahead::Lookahead;
use crate::match_request::MatchRequest;
use core::iter::FusedIterator;

/// Forward-only matcher over one key-sorted right input.
///
/// The matcher answers "which right elements carry this key?" by consuming
/// them from the front of its input. It never looks more than one element
/// ahead: an element whose key does not match the request stays buffered and
/// is offered again to the next request.
///
/// The input is trusted to be sorted ascending by key. If it is not, an
/// element that is passed over by every later request is never produced and
/// shows up as unused data when the matcher is drained.
///
/// # Examples
///
/// ```
/// use leftjoin_core::{MatchRequest, RightMatcher};
///
/// let mut matcher = RightMatcher::new(vec![(1, 'a'), (1, 'b'), (3, 'c')], |item: &(u32, char)| item.0);
///
/// let ones: Vec<_> = matcher.matches(MatchRequest::MatchKey(&1)).collect();
/// assert_eq!(ones, vec![(1, 'a'), (1, 'b')]);
///
/// // (3, 'c') is buffered but does not match 2
/// assert_eq!(matcher.matches(MatchRequest::MatchKey(&2)).count(), 0);
/// assert_eq!(matcher.drain(), 1);
/// ```
pub struct RightMatcher<I, K, F>
where
    I: Iterator,
{
    source: I,
    key: F,
    lookahead: Lookahead<K, I::Item>,
}

impl<I, K, F> RightMatcher<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: Fn(&I::Item) -> K,
{
    pub fn new<S>(source: S, key: F) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
            key,
            lookahead: Lookahead::new(KeyOrder::unchecked()),
        }
    }

    /// Like [`RightMatcher::new`], but failing the ascending-order check stops
    /// the matcher and is reported through [`RightMatcher::violation`].
    pub fn checked<S>(source: S, key: F) -> Self
    where
        S: IntoIterator<IntoIter = I>,
        K: PartialOrd,
    {
        let mut matcher = Self::new(source, key);
        matcher.lookahead.set_order(KeyOrder::ascending());
        matcher
    }

    /// Lazily produces the right elements satisfying `request`.
    ///
    /// The returned iterator pulls from the input only as far as needed; if it
    /// is dropped early the remaining matches are produced by the next request.
    pub fn matches<'m, 'k>(&'m mut self, request: MatchRequest<'k, K>) -> Matches<'m, 'k, I, K, F> {
        Matches {
            matcher: self,
            request,
        }
    }

    /// Consumes everything left in the input and returns how many elements
    /// that was.
    pub fn drain(&mut self) -> usize {
        self.matches(MatchRequest::MatchAll).count()
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

    /// Number of elements pulled from the input so far.
    #[must_use]
    pub const fn pulled(&self) -> usize {
        self.lookahead.pulled()
    }

    /// Returns `true` once the input has reported its end.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.lookahead.is_exhausted()
    }

    fn next_match(&mut self, request: MatchRequest<'_, K>) -> Option<I::Item> {
        if self.lookahead.needs_pull() {
            let pulled = self.source.next();
            self.lookahead.fill(pulled, &self.key);
        }
        self.lookahead.take_if(request)
    }
}

/// Iterator over the right elements matching one request.
///
/// Created by [`RightMatcher::matches`].
pub struct Matches<'m, 'k, I, K, F>
where
    I: Iterator,
{
    matcher: &'m mut RightMatcher<I, K, F>,
    request: MatchRequest<'k, K>,
}

impl<I, K, F> Iterator for Matches<'_, '_, I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: Fn(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.matcher.next_match(self.request)
    }
}

impl<I, K, F> FusedIterator for Matches<'_, '_, I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: Fn(&I::Item) -> K,
{
}
