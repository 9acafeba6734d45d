// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// One output row of a left join: a left element and, for every right input
/// in the order the inputs were added, the right elements sharing its key.
///
/// Each match list keeps the relative order of its right input and may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<L, R> {
    left: L,
    matches: Vec<Vec<R>>,
}

impl<L, R> Row<L, R> {
    #[must_use]
    pub const fn new(left: L, matches: Vec<Vec<R>>) -> Self {
        Self { left, matches }
    }

    /// The left element that produced this row
    #[must_use]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// All match lists, one per right input
    #[must_use]
    pub fn matches(&self) -> &[Vec<R>] {
        &self.matches
    }

    /// The match list of the right input at `input`, if such an input exists
    #[must_use]
    pub fn matches_for(&self, input: usize) -> Option<&[R]> {
        self.matches.get(input).map(Vec::as_slice)
    }

    /// Returns `true` if no right input had an element with this row's key
    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        self.matches.iter().all(Vec::is_empty)
    }

    #[must_use]
    pub fn into_left(self) -> L {
        self.left
    }

    #[must_use]
    pub fn into_parts(self) -> (L, Vec<Vec<R>>) {
        (self.left, self.matches)
    }
}
