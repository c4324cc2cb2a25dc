//! Error taxonomy for the decay and scheduling core.
//!
//! Every variant is an input-validation outcome: deterministic and
//! non-retryable. Calling again with the same arguments yields the same
//! error, so callers surface it instead of retrying.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned by the decay, overage, scheduling, and lifecycle APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Half-life is zero, negative, or not a finite number.
    #[error("Invalid half-life: {half_life_minutes} min (must be finite and > 0)")]
    InvalidHalfLife { half_life_minutes: f64 },

    /// Overage allowance is negative or not a finite number.
    #[error("Invalid overage percent: {overage_percent} (must be finite and >= 0)")]
    InvalidOveragePercent { overage_percent: f64 },

    /// A stage duration handed to the scheduler is negative, infinite, or NaN.
    #[error("Negative duration for stage '{stage}': {minutes} min")]
    NegativeDuration { stage: &'static str, minutes: f64 },

    /// An activity value is negative or not a finite number.
    #[error("Invalid activity: {activity} (must be finite and >= 0)")]
    InvalidActivity { activity: f64 },

    /// A status change that the transition table does not list.
    #[error("Invalid {entity} transition: {from} -> {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    /// Stepping back from the deadline left the representable time range.
    #[error("Time out of range computing start of stage '{stage}'")]
    TimeOutOfRange { stage: &'static str },

    /// Synthesis would have to start before `now`.
    #[error(
        "Infeasible schedule: synthesis must start at {synthesis_start}, \
         {shortfall_minutes:.1} min before {now}"
    )]
    InfeasibleSchedule {
        synthesis_start: DateTime<Utc>,
        now: DateTime<Utc>,
        shortfall_minutes: f64,
    },
}

/// Result alias used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;
