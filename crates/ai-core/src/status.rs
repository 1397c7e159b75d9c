#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of evaluating a tree node or a behavior for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Completed, or handed control back to the parent.
    Success,
    /// Not applicable this tick (out of range, cooling down, ...).
    Failure,
    /// In progress; expects to be evaluated again next tick.
    Running,
}

/// Terminal half of [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for Status {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Success => Status::Success,
            Outcome::Failure => Status::Failure,
        }
    }
}

impl Status {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::Running => None,
            Status::Success => Some(Outcome::Success),
            Status::Failure => Some(Outcome::Failure),
        }
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Running => "running",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
