// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::join_input::{BoxedKey, BoxedSequence};
use crate::key_order::KeyOrder;
use crate::match_request::MatchRequest;
use crate::right_matcher::RightMatcher;
use leftjoin_error::{JoinError, JoinSide, UnusedInput};

/// Right matcher over a boxed input, so inputs of different iterator and
/// closure types fit in one `Vec`.
pub type BoxedMatcher<'a, R, K> = RightMatcher<BoxedSequence<'a, R>, K, BoxedKey<'a, R, K>>;

/// The right inputs of a join, queried together once per left element.
///
/// Implemented for `Vec<BoxedMatcher>`, where every input shares one element
/// type and a row holds `Vec<Vec<R>>`, and for tuples of one to four
/// [`RightMatcher`]s, where each input keeps its own element type and a row
/// holds a tuple of `Vec`s.
pub trait RightSet<K> {
    /// One match list per right input.
    type Matches;

    /// Number of right inputs.
    fn arity(&self) -> usize;

    /// Switches every right input to the ascending-order check.
    fn check_order(&mut self)
    where
        K: PartialOrd;

    /// Collects, input by input, the right elements carrying `key`.
    ///
    /// # Errors
    ///
    /// [`JoinError::OutOfOrder`] if a checked input turned out unsorted.
    fn collect_matches(&mut self, key: &K) -> Result<Self::Matches, JoinError>;

    /// Consumes what every right input still holds and reports the inputs
    /// that had leftovers.
    ///
    /// # Errors
    ///
    /// [`JoinError::OutOfOrder`] if a checked input turned out unsorted.
    fn drain_unused(&mut self) -> Result<Vec<UnusedInput>, JoinError>;
}

fn out_of_order(input: usize, position: usize) -> JoinError {
    JoinError::out_of_order(JoinSide::Right(input), position)
}

impl<R, K> RightSet<K> for Vec<BoxedMatcher<'_, R, K>>
where
    K: PartialEq,
{
    type Matches = Vec<Vec<R>>;

    fn arity(&self) -> usize {
        self.len()
    }

    fn check_order(&mut self)
    where
        K: PartialOrd,
    {
        for matcher in self.iter_mut() {
            matcher.set_order(KeyOrder::ascending());
        }
    }

    fn collect_matches(&mut self, key: &K) -> Result<Vec<Vec<R>>, JoinError> {
        let mut matches = Vec::with_capacity(self.len());
        for (index, matcher) in self.iter_mut().enumerate() {
            let found: Vec<R> = matcher.matches(MatchRequest::MatchKey(key)).collect();
            if let Some(position) = matcher.violation() {
                return Err(out_of_order(index, position));
            }
            matches.push(found);
        }
        Ok(matches)
    }

    fn drain_unused(&mut self) -> Result<Vec<UnusedInput>, JoinError> {
        let mut unused = Vec::new();
        for (index, matcher) in self.iter_mut().enumerate() {
            let count = matcher.drain();
            if count > 0 {
                unused.push(UnusedInput::new(index, count));
            }
        }

        match self
            .iter()
            .enumerate()
            .find_map(|(index, matcher)| matcher.violation().map(|position| (index, position)))
        {
            Some((index, position)) => Err(out_of_order(index, position)),
            None => Ok(unused),
        }
    }
}

macro_rules! impl_right_set_for_tuple {
    ($arity:expr; $($index:tt: $I:ident $F:ident),+) => {
        impl<K, $($I, $F),+> RightSet<K> for ($(RightMatcher<$I, K, $F>,)+)
        where
            K: PartialEq,
            $($I: Iterator, $F: Fn(&$I::Item) -> K,)+
        {
            type Matches = ($(Vec<$I::Item>,)+);

            fn arity(&self) -> usize {
                $arity
            }

            fn check_order(&mut self)
            where
                K: PartialOrd,
            {
                $(self.$index.set_order(KeyOrder::ascending());)+
            }

            fn collect_matches(&mut self, key: &K) -> Result<Self::Matches, JoinError> {
                Ok(($(
                    {
                        let found: Vec<$I::Item> =
                            self.$index.matches(MatchRequest::MatchKey(key)).collect();
                        if let Some(position) = self.$index.violation() {
                            return Err(out_of_order($index, position));
                        }
                        found
                    },
                )+))
            }

            fn drain_unused(&mut self) -> Result<Vec<UnusedInput>, JoinError> {
                let mut unused = Vec::new();
                $(
                    let count = self.$index.drain();
                    if count > 0 {
                        unused.push(UnusedInput::new($index, count));
                    }
                )+
                $(
                    if let Some(position) = self.$index.violation() {
                        return Err(out_of_order($index, position));
                    }
                )+
                Ok(unused)
            }
        }
    };
}

impl_right_set_for_tuple!(1; 0: I0 F0);
impl_right_set_for_tuple!(2; 0: I0 F0, 1: I1 F1);
impl_right_set_for_tuple!(3; 0: I0 F0, 1: I1 F1, 2: I2 F2);
impl_right_set_for_tuple!(4; 0: I0 F0, 1: I1 F1, 2: I2 F2, 3: I3 F3);
