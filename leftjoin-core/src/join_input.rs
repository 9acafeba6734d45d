// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A sequence paired with the function extracting each element's join key.
pub struct JoinInput<S, F> {
    pub sequence: S,
    pub key: F,
}

impl<S, F> JoinInput<S, F> {
    #[must_use]
    pub const fn new(sequence: S, key: F) -> Self {
        Self { sequence, key }
    }
}

/// Type-erased right sequence.
pub type BoxedSequence<'a, E> = Box<dyn Iterator<Item = E> + 'a>;

/// Type-erased key extractor.
pub type BoxedKey<'a, E, K> = Box<dyn Fn(&E) -> K + 'a>;

/// Type-erased join input, so right inputs built from different iterator and
/// closure types can share one list.
pub type BoxedJoinInput<'a, E, K> = JoinInput<BoxedSequence<'a, E>, BoxedKey<'a, E, K>>;

impl<'a, E, K> JoinInput<BoxedSequence<'a, E>, BoxedKey<'a, E, K>> {
    /// Boxes a sequence and its key extractor.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftjoin_core::JoinInput;
    ///
    /// let inputs = vec![
    ///     JoinInput::boxed(vec![1u32, 2], |n: &u32| *n),
    ///     JoinInput::boxed((5u32..7).map(|n| n - 4), |n: &u32| *n),
    /// ];
    /// assert_eq!(inputs.len(), 2);
    /// ```
    pub fn boxed<S, F>(sequence: S, key: F) -> Self
    where
        S: IntoIterator<Item = E>,
        S::IntoIter: 'a,
        F: Fn(&E) -> K + 'a,
    {
        Self {
            sequence: Box::new(sequence.into_iter()),
            key: Box::new(key),
        }
    }
}
