// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::key_order::KeyOrder;
use crate::match_request::MatchRequest;

enum Slot<K, E> {
    Needed,
    Held { key: K, element: E },
    Exhausted,
}

/// Single-element staging area of a right matcher.
///
/// The lookahead is source-agnostic: the owner checks [`needs_pull`](Self::needs_pull),
/// pulls one element from its iterator or stream, and hands the result to
/// [`fill`](Self::fill). [`take_if`](Self::take_if) then releases the held
/// element only if it satisfies the request, so a non-matching element stays
/// buffered for the next request.
///
/// Each element's key is extracted exactly once, when the element is pulled.
pub struct Lookahead<K, E> {
    slot: Slot<K, E>,
    pulled: usize,
    order: KeyOrder<K>,
    violation: Option<usize>,
}

impl<K, E> Lookahead<K, E>
where
    K: PartialEq,
{
    #[must_use]
    pub const fn new(order: KeyOrder<K>) -> Self {
        Self {
            slot: Slot::Needed,
            pulled: 0,
            order,
            violation: None,
        }
    }

    /// Returns `true` when the owner must pull the next element before asking
    /// for a match. Never `true` once the source reported its end.
    #[must_use]
    pub const fn needs_pull(&self) -> bool {
        matches!(self.slot, Slot::Needed) && self.violation.is_none()
    }

    /// Stores the result of one pull.
    ///
    /// `None` marks the source as exhausted for good.
    pub fn fill<F>(&mut self, pulled: Option<E>, key_of: F)
    where
        F: FnOnce(&E) -> K,
    {
        debug_assert!(self.needs_pull(), "lookahead already holds an element");

        self.slot = match pulled {
            Some(element) => {
                let key = key_of(&element);
                if !self.order.admits(&key) {
                    self.violation = Some(self.pulled);
                }
                self.pulled += 1;
                Slot::Held { key, element }
            }
            None => Slot::Exhausted,
        };
    }

    /// Releases the held element if its key satisfies `request`.
    ///
    /// Returns `None` without consuming anything when the element does not
    /// match, when nothing is held, or after an ordering violation.
    pub fn take_if(&mut self, request: MatchRequest<'_, K>) -> Option<E> {
        if self.violation.is_some() {
            return None;
        }

        match &self.slot {
            Slot::Held { key, .. } if request.accepts(key) => {}
            _ => return None,
        }

        match core::mem::replace(&mut self.slot, Slot::Needed) {
            Slot::Held { key, element } => {
                self.order.retire(key);
                Some(element)
            }
            other => {
                self.slot = other;
                None
            }
        }
    }

    /// Replaces the ordering policy. Only meaningful before the first pull.
    pub fn set_order(&mut self, order: KeyOrder<K>) {
        self.order = order;
    }

    /// Zero-based position of the first element that broke the ascending
    /// order, if the order is checked and was broken.
    #[must_use]
    pub const fn violation(&self) -> Option<usize> {
        self.violation
    }

    /// Number of elements pulled from the source so far.
    #[must_use]
    pub const fn pulled(&self) -> usize {
        self.pulled
    }

    /// Returns `true` once the source reported its end.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.slot, Slot::Exhausted)
    }
}
