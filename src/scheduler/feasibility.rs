//! Feasibility of a plan against the current time.
//!
//! [`backward_schedule`](super::backward_schedule) has no clock, so it
//! happily returns plans whose synthesis should already have started.
//! Callers pass their own `now` here to reject or flag such plans.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::decay::elapsed_minutes;
use crate::error::{CoreError, CoreResult};
use crate::models::SchedulePlan;

/// Minutes between `now` and synthesis start.
///
/// Positive = spare time before synthesis must begin; negative = shortfall.
pub fn slack_minutes(plan: &SchedulePlan, now: DateTime<Utc>) -> f64 {
    elapsed_minutes(now, plan.synthesis_start)
}

/// Whether synthesis can still start on time (`synthesis_start >= now`).
pub fn is_feasible(plan: &SchedulePlan, now: DateTime<Utc>) -> bool {
    plan.synthesis_start >= now
}

/// Fails with [`CoreError::InfeasibleSchedule`] if synthesis would have to
/// start before `now`.
pub fn check_feasibility(plan: &SchedulePlan, now: DateTime<Utc>) -> CoreResult<()> {
    if is_feasible(plan, now) {
        return Ok(());
    }
    let shortfall_minutes = -slack_minutes(plan, now);
    warn!(
        synthesis_start = %plan.synthesis_start,
        delivery = %plan.delivery,
        %now,
        shortfall_minutes,
        "Schedule infeasible: synthesis start is in the past"
    );
    Err(CoreError::InfeasibleSchedule {
        synthesis_start: plan.synthesis_start,
        now,
        shortfall_minutes,
    })
}
