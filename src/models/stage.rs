//! Production stages and their durations.
//!
//! A dose moves through four stages before it reaches the customer:
//! synthesis → QC → packaging → travel. Durations are minutes and may be
//! fractional.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DeliveryRoute, ProductProfile};
use crate::error::{CoreError, CoreResult};

/// A production stage, in upstream-to-downstream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Radiosynthesis (cyclotron bombardment + chemistry).
    Synthesis,
    /// Quality control release testing.
    Qc,
    /// Dispensing and shielded packaging.
    Packaging,
    /// Transport to the delivery site.
    Travel,
}

impl Stage {
    /// Stages in the order a dose passes through them.
    pub const ALL: [Stage; 4] = [Stage::Synthesis, Stage::Qc, Stage::Packaging, Stage::Travel];

    /// Lowercase stage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synthesis => "synthesis",
            Self::Qc => "qc",
            Self::Packaging => "packaging",
            Self::Travel => "travel",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minute durations of the four stages for one product on one route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageDurations {
    /// Transport time (min).
    pub travel_minutes: f64,
    /// Packaging time (min).
    pub packaging_minutes: f64,
    /// QC time (min).
    pub qc_minutes: f64,
    /// Synthesis time (min).
    pub synthesis_minutes: f64,
}

impl StageDurations {
    /// Creates stage durations. Values are checked by [`Self::validate`].
    pub fn new(
        travel_minutes: f64,
        packaging_minutes: f64,
        qc_minutes: f64,
        synthesis_minutes: f64,
    ) -> Self {
        Self {
            travel_minutes,
            packaging_minutes,
            qc_minutes,
            synthesis_minutes,
        }
    }

    /// Combines a product's in-house stages with a route's travel time.
    pub fn from_profile(product: &ProductProfile, route: &DeliveryRoute) -> Self {
        Self {
            travel_minutes: route.travel_minutes,
            packaging_minutes: product.packaging_minutes,
            qc_minutes: product.qc_minutes,
            synthesis_minutes: product.synthesis_minutes,
        }
    }

    /// Duration of a single stage (min).
    pub fn get(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Synthesis => self.synthesis_minutes,
            Stage::Qc => self.qc_minutes,
            Stage::Packaging => self.packaging_minutes,
            Stage::Travel => self.travel_minutes,
        }
    }

    /// Lead time from synthesis start to delivery (min).
    pub fn total_minutes(&self) -> f64 {
        Stage::ALL.iter().map(|&s| self.get(s)).sum()
    }

    /// Rejects negative, infinite, or NaN durations.
    ///
    /// Stages are checked downstream-first (travel, packaging, QC,
    /// synthesis), so the first offending stage in that order is reported.
    pub fn validate(&self) -> CoreResult<()> {
        for stage in Stage::ALL.iter().rev() {
            let minutes = self.get(*stage);
            if !(minutes.is_finite() && minutes >= 0.0) {
                return Err(CoreError::NegativeDuration {
                    stage: stage.as_str(),
                    minutes,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_minutes() {
        let d = StageDurations::new(30.0, 20.0, 45.0, 90.0);
        assert!((d.total_minutes() - 185.0).abs() < 1e-12);
        assert_eq!(d.get(Stage::Qc), 45.0);
    }

    #[test]
    fn test_validate_reports_first_negative_downstream() {
        let d = StageDurations::new(30.0, -1.0, 45.0, -2.0);
        match d.validate() {
            Err(CoreError::NegativeDuration { stage, minutes }) => {
                assert_eq!(stage, "packaging");
                assert_eq!(minutes, -1.0);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_zero_and_nan() {
        assert!(StageDurations::default().validate().is_ok());
        let d = StageDurations::new(f64::NAN, 0.0, 0.0, 0.0);
        assert!(matches!(
            d.validate(),
            Err(CoreError::NegativeDuration { stage: "travel", .. })
        ));
        let d = StageDurations::new(f64::INFINITY, 0.0, 0.0, 0.0);
        assert!(matches!(
            d.validate(),
            Err(CoreError::NegativeDuration { stage: "travel", .. })
        ));
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Synthesis.to_string(), "synthesis");
        assert_eq!(Stage::ALL[3], Stage::Travel);
    }
}
