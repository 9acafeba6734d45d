// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Debug};

/// What a right matcher is asked to produce.
///
/// The join driver asks for [`MatchRequest::MatchKey`] once per left element.
/// [`MatchRequest::MatchAll`] is only used after the left input is exhausted,
/// to drain whatever the right inputs still hold.
pub enum MatchRequest<'k, K> {
    /// Right elements whose key equals the given left key
    MatchKey(&'k K),
    /// Every remaining right element, regardless of key
    MatchAll,
}

impl<K: PartialEq> MatchRequest<'_, K> {
    /// Returns `true` if an element with `key` satisfies this request.
    #[must_use]
    pub fn accepts(&self, key: &K) -> bool {
        match self {
            Self::MatchKey(requested) => *requested == key,
            Self::MatchAll => true,
        }
    }
}

// Manual impls: the request only borrows the key, so it is `Copy` for any `K`.
impl<K> Clone for MatchRequest<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for MatchRequest<'_, K> {}

impl<K: Debug> Debug for MatchRequest<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchKey(key) => f.debug_tuple("MatchKey").field(key).finish(),
            Self::MatchAll => f.write_str("MatchAll"),
        }
    }
}
