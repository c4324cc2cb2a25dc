//! Continuous exponential decay arithmetic.
//!
//! All functions are pure: they take plain values and return plain values
//! or a [`CoreError`]. Time is measured in minutes; activity is in whatever
//! unit the caller uses (mCi, MBq, ...) and is never converted.
//!
//! # Model
//!
//! ```text
//! λ    = ln(2) / T½
//! A(t) = A₀ · e^(−λt)
//! A₀   = A(t) / e^(−λt)
//! ```
//!
//! No rounding is applied; callers round for display only. A negative
//! elapsed time runs decay backward (growth), which lets callers use the
//! same functions in both directions.
//!
//! # Reference
//! Cherry, Sorenson & Phelps (2012), "Physics in Nuclear Medicine", Ch. 4

mod nuclide;
pub mod overage;

pub use nuclide::Nuclide;
pub use overage::production_activity_with_overage;

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};

/// Decay constant `λ = ln(2) / half_life` (per minute).
///
/// # Errors
/// [`CoreError::InvalidHalfLife`] when the half-life is not finite or is `<= 0`.
pub fn decay_constant(half_life_minutes: f64) -> CoreResult<f64> {
    if !(half_life_minutes.is_finite() && half_life_minutes > 0.0) {
        return Err(CoreError::InvalidHalfLife { half_life_minutes });
    }
    Ok(std::f64::consts::LN_2 / half_life_minutes)
}

/// Fraction of the initial activity remaining after `elapsed_minutes`.
///
/// `1.0` at zero elapsed time, `0.5` after one half-life.
pub fn decay_fraction(half_life_minutes: f64, elapsed_minutes: f64) -> CoreResult<f64> {
    let lambda = decay_constant(half_life_minutes)?;
    Ok((-lambda * elapsed_minutes).exp())
}

/// Activity remaining from `initial_activity` after `elapsed_minutes`.
///
/// # Example
///
/// ```
/// use u_decay_schedule::decay::decayed_activity;
///
/// // One half-life halves the activity.
/// let a = decayed_activity(10.0, 110.0, 110.0).unwrap();
/// assert!((a - 5.0).abs() < 1e-9);
/// ```
pub fn decayed_activity(
    initial_activity: f64,
    half_life_minutes: f64,
    elapsed_minutes: f64,
) -> CoreResult<f64> {
    let fraction = decay_fraction(half_life_minutes, elapsed_minutes)?;
    check_activity(initial_activity)?;
    if initial_activity == 0.0 {
        return Ok(0.0);
    }
    finite_activity(initial_activity * fraction)
}

/// Activity that must exist now so that `target_activity` remains after
/// `elapsed_minutes`. Algebraic inverse of [`decayed_activity`].
///
/// # Errors
/// [`CoreError::InvalidActivity`] when the result overflows `f64`, e.g. when
/// the decay factor underflows to zero over a very long elapsed time.
pub fn required_initial_activity(
    target_activity: f64,
    half_life_minutes: f64,
    elapsed_minutes: f64,
) -> CoreResult<f64> {
    let fraction = decay_fraction(half_life_minutes, elapsed_minutes)?;
    check_activity(target_activity)?;
    if target_activity == 0.0 {
        return Ok(0.0);
    }
    finite_activity(target_activity / fraction)
}

/// Minutes until `initial_activity` decays down to `target_activity`.
///
/// Negative when `target_activity` exceeds `initial_activity`.
///
/// # Errors
/// [`CoreError::InvalidActivity`] when either activity is `<= 0`, since a
/// zero endpoint is never reached by exponential decay.
pub fn time_to_decay(
    initial_activity: f64,
    target_activity: f64,
    half_life_minutes: f64,
) -> CoreResult<f64> {
    let lambda = decay_constant(half_life_minutes)?;
    for activity in [initial_activity, target_activity] {
        if !(activity.is_finite() && activity > 0.0) {
            return Err(CoreError::InvalidActivity { activity });
        }
    }
    Ok((initial_activity / target_activity).ln() / lambda)
}

/// Signed minutes from `start` to `end` (negative if `end` is earlier).
pub fn elapsed_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let delta = end - start;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => delta.num_milliseconds() as f64 / 60_000.0,
    }
}

/// Whether `target_time` falls within `[production_time, production_time + shelf_life]`.
pub fn is_within_shelf_life(
    production_time: DateTime<Utc>,
    target_time: DateTime<Utc>,
    shelf_life_minutes: f64,
) -> bool {
    let elapsed = elapsed_minutes(production_time, target_time);
    (0.0..=shelf_life_minutes).contains(&elapsed)
}

/// Rejects results that left the finite range (`inf`, or `NaN` from `0/0`).
pub(crate) fn finite_activity(activity: f64) -> CoreResult<f64> {
    if activity.is_finite() {
        Ok(activity)
    } else {
        Err(CoreError::InvalidActivity { activity })
    }
}

fn check_activity(activity: f64) -> CoreResult<()> {
    if activity.is_finite() && activity >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidActivity { activity })
    }
}
