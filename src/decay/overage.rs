//! Production overage.
//!
//! The activity produced must cover decay between production and
//! administration, plus a percentage allowance for handling and QC
//! sampling losses:
//!
//! ```text
//! A_prod = A_req / e^(−λ·(t_inj − t_prod)) · (1 + overage% / 100)
//! ```

use chrono::{DateTime, Utc};

use super::{elapsed_minutes, finite_activity, required_initial_activity};
use crate::error::{CoreError, CoreResult};

/// Activity to produce at `production_time` so that `requested_activity`
/// remains at `injection_time`, scaled up by `overage_percent`.
///
/// `injection_time` is expected to follow `production_time`; an earlier
/// injection time is not rejected and yields less than the request.
///
/// # Errors
/// - [`CoreError::InvalidHalfLife`] for a non-positive half-life.
/// - [`CoreError::InvalidOveragePercent`] when `overage_percent < 0`.
/// - [`CoreError::InvalidActivity`] for a negative requested activity, or when
///   the decay correction overflows `f64`.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use u_decay_schedule::decay::production_activity_with_overage;
///
/// let produced = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
/// let injected = produced + Duration::minutes(110);
///
/// // 10 needed one half-life out, 10% overage → 22.
/// let a = production_activity_with_overage(10.0, 110.0, injected, produced, 10.0).unwrap();
/// assert!((a - 22.0).abs() < 1e-9);
/// ```
pub fn production_activity_with_overage(
    requested_activity: f64,
    half_life_minutes: f64,
    injection_time: DateTime<Utc>,
    production_time: DateTime<Utc>,
    overage_percent: f64,
) -> CoreResult<f64> {
    if !(overage_percent.is_finite() && overage_percent >= 0.0) {
        return Err(CoreError::InvalidOveragePercent { overage_percent });
    }
    let elapsed = elapsed_minutes(production_time, injection_time);
    let initial = required_initial_activity(requested_activity, half_life_minutes, elapsed)?;
    finite_activity(initial * (1.0 + overage_percent / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_no_overage_equals_required_initial() {
        let inj = t0() + Duration::minutes(220);
        let a = production_activity_with_overage(5.0, 110.0, inj, t0(), 0.0).unwrap();
        assert!((a - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_overage_scales_linearly() {
        let inj = t0() + Duration::minutes(60);
        let base = production_activity_with_overage(8.0, 109.77, inj, t0(), 0.0).unwrap();
        let with = production_activity_with_overage(8.0, 109.77, inj, t0(), 25.0).unwrap();
        assert!((with - base * 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_same_instant_only_overage() {
        let a = production_activity_with_overage(10.0, 20.38, t0(), t0(), 15.0).unwrap();
        assert!((a - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_negative_overage() {
        let err = production_activity_with_overage(10.0, 110.0, t0(), t0(), -1.0).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidOveragePercent {
                overage_percent: -1.0
            }
        );
    }

    #[test]
    fn test_overflowing_decay_correction_rejected() {
        // 2000 half-lives between production and injection.
        let inj = t0() + Duration::minutes(2000);
        let err = production_activity_with_overage(5.0, 1.0, inj, t0(), 10.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidActivity { .. }));

        let zero = production_activity_with_overage(0.0, 1.0, inj, t0(), 10.0).unwrap();
        assert_eq!(zero, 0.0);
    }

    #[test]
    fn test_propagates_half_life_error() {
        let err = production_activity_with_overage(10.0, 0.0, t0(), t0(), 10.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidHalfLife { .. }));
    }
}
