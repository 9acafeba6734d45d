// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Opt-in verification that an input is sorted ascending by key.

use core::cmp::Ordering;

/// Whether a join verifies the ordering of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderCheck {
    /// Inputs are trusted to be sorted ascending. Violations surface only as
    /// wrong match lists or unused data.
    #[default]
    Unchecked,
    /// Every key is compared with its predecessor and a decreasing key fails
    /// the join.
    Ascending,
}

/// Tracks the most recent key of one input when ordering is checked.
///
/// Keys are handed over with [`KeyOrder::retire`] once their element has been
/// consumed, so no key needs to be cloned. An unchecked tracker drops them.
pub struct KeyOrder<K> {
    in_order: Option<fn(&K, &K) -> bool>,
    last: Option<K>,
}

impl<K> KeyOrder<K> {
    /// A tracker that accepts every key.
    #[must_use]
    pub const fn unchecked() -> Self {
        Self {
            in_order: None,
            last: None,
        }
    }

    /// A tracker that rejects a key smaller than the previous one.
    ///
    /// Equal consecutive keys are accepted.
    #[must_use]
    pub fn ascending() -> Self
    where
        K: PartialOrd,
    {
        Self {
            in_order: Some(not_decreasing::<K>),
            last: None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> OrderCheck {
        match self.in_order {
            Some(_) => OrderCheck::Ascending,
            None => OrderCheck::Unchecked,
        }
    }

    /// Returns `false` if `key` breaks the ascending order of this input.
    #[must_use]
    pub fn admits(&self, key: &K) -> bool {
        match (self.in_order, &self.last) {
            (Some(in_order), Some(last)) => in_order(last, key),
            _ => true,
        }
    }

    /// Records `key` as the latest consumed key.
    pub fn retire(&mut self, key: K) {
        if self.in_order.is_some() {
            self.last = Some(key);
        }
    }
}

impl<K> Default for KeyOrder<K> {
    fn default() -> Self {
        Self::unchecked()
    }
}

fn not_decreasing<K: PartialOrd>(last: &K, next: &K) -> bool {
    next.partial_cmp(last) != Some(Ordering::Less)
}
