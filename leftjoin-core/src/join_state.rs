// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Display};

/// Lifecycle of one join.
///
/// ```text
/// NotStarted -> Running -> Draining -> Completed
///                  |           \-----> Failed
///                  \-----------------> Failed   (order check only)
/// ```
///
/// No state is entered twice. A completed or failed join only reports the
/// end of its row sequence; a new join needs fresh inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinState {
    /// No row has been requested yet
    #[default]
    NotStarted,
    /// Rows are being produced from the left input
    Running,
    /// The left input is exhausted and right inputs are being drained
    Draining,
    /// Every row was produced and no right input had leftovers
    Completed,
    /// The join ended with an error
    Failed,
}

impl JoinState {
    /// Returns `true` once the join can produce nothing more.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl Display for JoinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::Draining => "draining",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
