//! Backward scheduling from a delivery deadline.
//!
//! # Algorithm
//!
//! Walk upstream from the deadline, subtracting one stage duration at a time:
//!
//! ```text
//! dispatch        = delivery        − travel
//! packaging_start = dispatch        − packaging
//! qc_start        = packaging_start − qc
//! synthesis_start = qc_start        − synthesis
//! ```
//!
//! With non-negative durations each instant is ≤ its successor. The
//! function is pure time arithmetic: it has no clock and never judges
//! whether the plan starts in the past (see [`super::check_feasibility`]).
//!
//! # Reference
//! Pinedo (2016), "Scheduling", backward (right-shift) scheduling from due dates

use chrono::{DateTime, Duration, Utc};

use crate::error::{CoreError, CoreResult};
use crate::models::{SchedulePlan, Stage, StageDurations};

/// Converts fractional minutes to a [`Duration`] at microsecond resolution.
pub fn minutes_to_duration(minutes: f64) -> Duration {
    Duration::microseconds((minutes * 60_000_000.0).round() as i64)
}

/// Computes stage start times working backward from `delivery_time`.
///
/// # Errors
/// - [`CoreError::NegativeDuration`] if any duration is negative, infinite, or NaN.
/// - [`CoreError::TimeOutOfRange`] if a start time falls outside the
///   representable timestamp range.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_decay_schedule::scheduler::backward_schedule;
///
/// let delivery = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let plan = backward_schedule(delivery, 30.0, 20.0, 45.0, 90.0).unwrap();
///
/// assert_eq!(plan.dispatch, Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap());
/// assert_eq!(plan.synthesis_start, Utc.with_ymd_and_hms(2024, 1, 1, 8, 55, 0).unwrap());
/// ```
pub fn backward_schedule(
    delivery_time: DateTime<Utc>,
    travel_minutes: f64,
    packaging_minutes: f64,
    qc_minutes: f64,
    synthesis_minutes: f64,
) -> CoreResult<SchedulePlan> {
    let durations = StageDurations::new(
        travel_minutes,
        packaging_minutes,
        qc_minutes,
        synthesis_minutes,
    );
    backward_schedule_stages(delivery_time, &durations)
}

/// [`backward_schedule`] taking a [`StageDurations`] bundle.
pub fn backward_schedule_stages(
    delivery_time: DateTime<Utc>,
    durations: &StageDurations,
) -> CoreResult<SchedulePlan> {
    durations.validate()?;

    let step_back = |from: DateTime<Utc>, stage: Stage| {
        from.checked_sub_signed(minutes_to_duration(durations.get(stage)))
            .ok_or(CoreError::TimeOutOfRange {
                stage: stage.as_str(),
            })
    };

    let dispatch = step_back(delivery_time, Stage::Travel)?;
    let packaging_start = step_back(dispatch, Stage::Packaging)?;
    let qc_start = step_back(packaging_start, Stage::Qc)?;
    let synthesis_start = step_back(qc_start, Stage::Synthesis)?;

    Ok(SchedulePlan {
        synthesis_start,
        qc_start,
        packaging_start,
        dispatch,
        delivery: delivery_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_reference_timetable() {
        let plan = backward_schedule(at(12, 0), 30.0, 20.0, 45.0, 90.0).unwrap();
        assert_eq!(plan.delivery, at(12, 0));
        assert_eq!(plan.dispatch, at(11, 30));
        assert_eq!(plan.packaging_start, at(11, 10));
        assert_eq!(plan.qc_start, at(10, 25));
        assert_eq!(plan.synthesis_start, at(8, 55));
        assert!(plan.is_ordered());
    }

    #[test]
    fn test_zero_durations_collapse_to_delivery() {
        let plan = backward_schedule(at(12, 0), 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(plan.synthesis_start, at(12, 0));
        assert!(plan.is_ordered());
    }

    #[test]
    fn test_fractional_minutes() {
        let plan = backward_schedule(at(12, 0), 0.5, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(plan.dispatch, at(11, 59) + Duration::seconds(30));
    }

    #[test]
    fn test_negative_duration_rejected() {
        for (i, bad) in [
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.0],
            [0.0, 0.0, 0.0, -1.0],
        ]
        .iter()
        .enumerate()
        {
            let err = backward_schedule(at(12, 0), bad[0], bad[1], bad[2], bad[3]).unwrap_err();
            let expected = ["travel", "packaging", "qc", "synthesis"][i];
            assert_eq!(
                err,
                CoreError::NegativeDuration {
                    stage: expected,
                    minutes: -1.0
                }
            );
        }
    }

    #[test]
    fn test_infinite_duration_rejected() {
        let err = backward_schedule(at(12, 0), f64::INFINITY, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NegativeDuration { stage: "travel", minutes } if minutes.is_infinite()
        ));
    }

    #[test]
    fn test_out_of_range() {
        let err = backward_schedule(at(12, 0), 0.0, 0.0, 0.0, 1e15).unwrap_err();
        assert_eq!(err, CoreError::TimeOutOfRange { stage: "synthesis" });
    }

    #[test]
    fn test_minutes_to_duration() {
        assert_eq!(minutes_to_duration(1.0), Duration::seconds(60));
        assert_eq!(minutes_to_duration(0.25), Duration::seconds(15));
        assert_eq!(minutes_to_duration(0.0), Duration::zero());
    }
}
