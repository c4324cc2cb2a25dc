//! Backward schedule plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Stage;
use crate::decay::elapsed_minutes;

/// Start instants of each production stage, derived from a delivery deadline.
///
/// Invariant: `synthesis_start <= qc_start <= packaging_start <= dispatch <= delivery`.
/// A plan is recomputed per request, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Synthesis start.
    pub synthesis_start: DateTime<Utc>,
    /// QC start (= end of synthesis).
    pub qc_start: DateTime<Utc>,
    /// Packaging start (= end of QC).
    pub packaging_start: DateTime<Utc>,
    /// Dispatch (= end of packaging, start of travel).
    pub dispatch: DateTime<Utc>,
    /// Delivery deadline.
    pub delivery: DateTime<Utc>,
}

impl SchedulePlan {
    /// Start instant of a stage.
    pub fn stage_start(&self, stage: Stage) -> DateTime<Utc> {
        match stage {
            Stage::Synthesis => self.synthesis_start,
            Stage::Qc => self.qc_start,
            Stage::Packaging => self.packaging_start,
            Stage::Travel => self.dispatch,
        }
    }

    /// End instant of a stage.
    pub fn stage_end(&self, stage: Stage) -> DateTime<Utc> {
        match stage {
            Stage::Synthesis => self.qc_start,
            Stage::Qc => self.packaging_start,
            Stage::Packaging => self.dispatch,
            Stage::Travel => self.delivery,
        }
    }

    /// End of synthesis, the usual activity calibration point.
    #[inline]
    pub fn end_of_synthesis(&self) -> DateTime<Utc> {
        self.qc_start
    }

    /// Lead time from synthesis start to delivery (min).
    pub fn lead_time_minutes(&self) -> f64 {
        elapsed_minutes(self.synthesis_start, self.delivery)
    }

    /// Whether the instants are in non-decreasing stage order.
    pub fn is_ordered(&self) -> bool {
        self.synthesis_start <= self.qc_start
            && self.qc_start <= self.packaging_start
            && self.packaging_start <= self.dispatch
            && self.dispatch <= self.delivery
    }
}
