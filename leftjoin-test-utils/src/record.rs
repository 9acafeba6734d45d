// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// Minimal keyed element: an `id` to join on and an optional payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record {
    pub id: u32,
    pub value: Option<&'static str>,
}

impl Record {
    #[must_use]
    pub const fn new(id: u32, value: &'static str) -> Self {
        Self {
            id,
            value: Some(value),
        }
    }

    #[must_use]
    pub const fn key_only(id: u32) -> Self {
        Self { id, value: None }
    }

    /// Key extractor usable directly as a join key function.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{{id:{}, v:{}}}", self.id, value),
            None => write!(f, "{{id:{}}}", self.id),
        }
    }
}

/// Shorthand for a record carrying a payload.
#[must_use]
pub const fn record(id: u32, value: &'static str) -> Record {
    Record::new(id, value)
}

/// Shorthand for a record carrying only a key.
#[must_use]
pub const fn key(id: u32) -> Record {
    Record::key_only(id)
}
