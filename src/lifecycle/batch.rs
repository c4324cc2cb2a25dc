use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::Lifecycle;

/// Production batch status.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    QcPending,
    QcInProgress,
    QcPassed,
    QcFailed,
    /// Released for dispensing (terminal)
    Released,
    /// Terminal
    Cancelled,
}

impl BatchStatus {
    /// Upper-case status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::QcPending => "QC_PENDING",
            Self::QcInProgress => "QC_IN_PROGRESS",
            Self::QcPassed => "QC_PASSED",
            Self::QcFailed => "QC_FAILED",
            Self::Released => "RELEASED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether the batch may move directly to `next`.
    pub fn can_transition_to(self, next: Self) -> bool {
        super::can_transition(self, next)
    }

    /// Statuses the batch may move to next.
    pub fn next_allowed_statuses(self) -> BTreeSet<Self> {
        super::next_allowed_statuses(self)
    }
}

impl Lifecycle for BatchStatus {
    const ENTITY: &'static str = "batch";

    const ALL: &'static [Self] = &[
        Self::Planned,
        Self::InProgress,
        Self::Completed,
        Self::QcPending,
        Self::QcInProgress,
        Self::QcPassed,
        Self::QcFailed,
        Self::Released,
        Self::Cancelled,
    ];

    fn initial() -> Self {
        Self::Planned
    }

    fn allowed_transitions(self) -> &'static [Self] {
        use BatchStatus::*;
        match self {
            Planned => &[InProgress, Cancelled],
            InProgress => &[Completed, Cancelled],
            Completed => &[QcPending],
            QcPending => &[QcInProgress],
            QcInProgress => &[QcPassed, QcFailed],
            QcPassed => &[Released],
            QcFailed => &[Cancelled],
            Released => &[],
            Cancelled => &[],
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid batch status: {s}"))
    }
}
