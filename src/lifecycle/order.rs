use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::Lifecycle;

/// Customer order status.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Being edited by the customer; initial status
    #[default]
    Draft,
    /// Sent for review
    Submitted,
    /// Checked and accepted
    Validated,
    /// Assigned a production slot
    Scheduled,
    /// Synthesis under way
    InProduction,
    /// Awaiting QC release
    QcPending,
    /// QC passed, ready to ship
    Released,
    /// Handed to the courier
    Dispatched,
    /// Received by the customer (terminal)
    Delivered,
    /// Withdrawn (terminal)
    Cancelled,
    /// Refused at review; may be reworked as a new draft
    Rejected,
    /// Product failed QC
    FailedQc,
    /// Being reproduced after a QC failure
    Rework,
}

impl OrderStatus {
    /// Upper-case status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Validated => "VALIDATED",
            Self::Scheduled => "SCHEDULED",
            Self::InProduction => "IN_PRODUCTION",
            Self::QcPending => "QC_PENDING",
            Self::Released => "RELEASED",
            Self::Dispatched => "DISPATCHED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Rejected => "REJECTED",
            Self::FailedQc => "FAILED_QC",
            Self::Rework => "REWORK",
        }
    }

    /// Whether the order may move directly to `next`.
    pub fn can_transition_to(self, next: Self) -> bool {
        super::can_transition(self, next)
    }

    /// Statuses the order may move to next.
    pub fn next_allowed_statuses(self) -> BTreeSet<Self> {
        super::next_allowed_statuses(self)
    }
}

impl Lifecycle for OrderStatus {
    const ENTITY: &'static str = "order";

    const ALL: &'static [Self] = &[
        Self::Draft,
        Self::Submitted,
        Self::Validated,
        Self::Scheduled,
        Self::InProduction,
        Self::QcPending,
        Self::Released,
        Self::Dispatched,
        Self::Delivered,
        Self::Cancelled,
        Self::Rejected,
        Self::FailedQc,
        Self::Rework,
    ];

    fn initial() -> Self {
        Self::Draft
    }

    fn allowed_transitions(self) -> &'static [Self] {
        use OrderStatus::*;
        match self {
            Draft => &[Submitted, Cancelled],
            Submitted => &[Validated, Rejected, Cancelled],
            Validated => &[Scheduled, Cancelled],
            Scheduled => &[InProduction, Cancelled],
            InProduction => &[QcPending, Cancelled],
            QcPending => &[Released, FailedQc],
            Released => &[Dispatched],
            Dispatched => &[Delivered],
            Delivered => &[],
            Cancelled => &[],
            Rejected => &[Draft],
            FailedQc => &[Rework, Cancelled],
            Rework => &[InProduction, Cancelled],
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid order status: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    fn set(statuses: &[OrderStatus]) -> BTreeSet<OrderStatus> {
        statuses.iter().copied().collect()
    }

    #[test]
    fn test_transition_table_exact() {
        let expected: [(OrderStatus, &[OrderStatus]); 13] = [
            (Draft, &[Submitted, Cancelled]),
            (Submitted, &[Validated, Rejected, Cancelled]),
            (Validated, &[Scheduled, Cancelled]),
            (Scheduled, &[InProduction, Cancelled]),
            (InProduction, &[QcPending, Cancelled]),
            (QcPending, &[Released, FailedQc]),
            (Released, &[Dispatched]),
            (Dispatched, &[Delivered]),
            (Delivered, &[]),
            (Cancelled, &[]),
            (Rejected, &[Draft]),
            (FailedQc, &[Rework, Cancelled]),
            (Rework, &[InProduction, Cancelled]),
        ];
        for (from, to) in expected {
            assert_eq!(from.next_allowed_statuses(), set(to), "table row for {from}");
        }
    }

    #[test]
    fn test_can_transition_matches_table() {
        for &from in OrderStatus::ALL {
            let allowed = from.next_allowed_statuses();
            for &to in OrderStatus::ALL {
                assert_eq!(from.can_transition_to(to), allowed.contains(&to));
            }
        }
    }

    #[test]
    fn test_illegal_skip_rejected() {
        assert!(!Draft.can_transition_to(Released));
        assert!(!Scheduled.can_transition_to(Delivered));
        assert!(!Rejected.can_transition_to(Submitted));
    }

    #[test]
    fn test_terminal_has_no_exits() {
        assert!(Delivered.next_allowed_statuses().is_empty());
        assert!(Cancelled.next_allowed_statuses().is_empty());
        assert!(Delivered.is_terminal());
        assert!(!Rejected.is_terminal());
    }

    /// Exhaustive, so a new variant fails to compile here until it is
    /// given a position in `ALL`.
    fn ordinal(status: OrderStatus) -> usize {
        match status {
            Draft => 0,
            Submitted => 1,
            Validated => 2,
            Scheduled => 3,
            InProduction => 4,
            QcPending => 5,
            Released => 6,
            Dispatched => 7,
            Delivered => 8,
            Cancelled => 9,
            Rejected => 10,
            FailedQc => 11,
            Rework => 12,
        }
    }

    #[test]
    fn test_all_lists_every_status_once() {
        assert_eq!(OrderStatus::ALL.len(), 13);
        for (i, &s) in OrderStatus::ALL.iter().enumerate() {
            assert_eq!(ordinal(s), i, "{s} out of place in ALL");
        }
    }

    #[test]
    fn test_initial_and_default() {
        assert_eq!(OrderStatus::initial(), Draft);
        assert_eq!(OrderStatus::default(), Draft);
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(InProduction.to_string(), "IN_PRODUCTION");
        assert_eq!("FAILED_QC".parse::<OrderStatus>().unwrap(), FailedQc);
        assert!("failed_qc".parse::<OrderStatus>().is_err());
        for &s in OrderStatus::ALL {
            assert_eq!(s.as_str().parse::<OrderStatus>().unwrap(), s);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&QcPending).unwrap();
        assert_eq!(json, "\"QC_PENDING\"");
        let parsed: OrderStatus = serde_json::from_str("\"REWORK\"").unwrap();
        assert_eq!(parsed, Rework);
    }
}
