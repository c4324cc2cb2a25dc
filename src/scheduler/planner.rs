//! Production planner: *when* to synthesize and *how much*.
//!
//! # Algorithm
//!
//! 1. Backward-schedule the product's stages from the delivery deadline.
//! 2. Pick the calibration instant (synthesis start or end of synthesis).
//! 3. Compute the activity needed at that instant so the requested dose
//!    remains at administration time, plus the product's overage.
//!
//! The planner holds only the product profile it was built with; each call
//! returns a fresh [`ProductionPlan`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{backward_schedule_stages, check_feasibility};
use crate::decay::{
    decayed_activity, elapsed_minutes, is_within_shelf_life, production_activity_with_overage,
};
use crate::error::CoreResult;
use crate::models::{DeliveryRoute, ProductProfile, SchedulePlan, StageDurations};

/// Instant at which the production activity is quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationPoint {
    /// Start of synthesis.
    #[default]
    SynthesisStart,
    /// End of synthesis (= QC start), the usual EOS calibration.
    EndOfSynthesis,
}

/// One dose request to plan for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRequest {
    /// Activity required at administration time.
    pub requested_activity: f64,
    /// Delivery deadline at the customer site.
    pub delivery_time: DateTime<Utc>,
    /// Administration (injection) time. `None` = at delivery.
    pub administration_time: Option<DateTime<Utc>>,
    /// Route the dose travels.
    pub route: DeliveryRoute,
}

impl ProductionRequest {
    /// Creates a request administered at delivery time.
    pub fn new(requested_activity: f64, delivery_time: DateTime<Utc>, route: DeliveryRoute) -> Self {
        Self {
            requested_activity,
            delivery_time,
            administration_time: None,
            route,
        }
    }

    /// Sets the administration time.
    pub fn with_administration_time(mut self, time: DateTime<Utc>) -> Self {
        self.administration_time = Some(time);
        self
    }

    /// Administration time, defaulting to delivery.
    pub fn injection_time(&self) -> DateTime<Utc> {
        self.administration_time.unwrap_or(self.delivery_time)
    }
}

/// A computed production plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// Stage timetable.
    pub schedule: SchedulePlan,
    /// Instant `production_activity` refers to.
    pub calibration_time: DateTime<Utc>,
    /// Activity to produce at `calibration_time`, overage included.
    pub production_activity: f64,
    /// Activity left on arrival at the customer.
    pub activity_at_delivery: f64,
    /// Whether administration falls within shelf life (from end of synthesis).
    pub within_shelf_life: bool,
}

/// Combines backward scheduling with decay and overage for one product.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_decay_schedule::decay::Nuclide;
/// use u_decay_schedule::models::{DeliveryRoute, ProductProfile};
/// use u_decay_schedule::scheduler::{ProductionPlanner, ProductionRequest};
///
/// let fdg = ProductProfile::new("FDG", &Nuclide::f18())
///     .with_overage(10.0)
///     .with_stages(90.0, 45.0, 20.0);
/// let planner = ProductionPlanner::new(fdg);
///
/// let delivery = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let request = ProductionRequest::new(10.0, delivery, DeliveryRoute::new("North", 30.0));
/// let plan = planner.plan(&request).unwrap();
///
/// assert_eq!(plan.schedule.synthesis_start, Utc.with_ymd_and_hms(2024, 1, 1, 8, 55, 0).unwrap());
/// assert!(plan.production_activity > 10.0 * 1.1);
/// ```
#[derive(Debug, Clone)]
pub struct ProductionPlanner {
    product: ProductProfile,
    calibration: CalibrationPoint,
}

impl ProductionPlanner {
    /// Creates a planner calibrating at synthesis start.
    pub fn new(product: ProductProfile) -> Self {
        Self {
            product,
            calibration: CalibrationPoint::default(),
        }
    }

    /// Sets the calibration point.
    pub fn with_calibration(mut self, calibration: CalibrationPoint) -> Self {
        self.calibration = calibration;
        self
    }

    /// The product this planner serves.
    pub fn product(&self) -> &ProductProfile {
        &self.product
    }

    /// Plans production for one request.
    ///
    /// # Errors
    /// Any error from [`backward_schedule_stages`] or
    /// [`production_activity_with_overage`].
    pub fn plan(&self, request: &ProductionRequest) -> CoreResult<ProductionPlan> {
        let product = &self.product;
        let durations = StageDurations::from_profile(product, &request.route);
        let schedule = backward_schedule_stages(request.delivery_time, &durations)?;

        let calibration_time = match self.calibration {
            CalibrationPoint::SynthesisStart => schedule.synthesis_start,
            CalibrationPoint::EndOfSynthesis => schedule.end_of_synthesis(),
        };
        let injection_time = request.injection_time();

        let production_activity = production_activity_with_overage(
            request.requested_activity,
            product.half_life_minutes,
            injection_time,
            calibration_time,
            product.overage_percent,
        )?;
        let activity_at_delivery = decayed_activity(
            production_activity,
            product.half_life_minutes,
            elapsed_minutes(calibration_time, schedule.delivery),
        )?;
        let within_shelf_life = product
            .shelf_life_minutes
            .map_or(true, |shelf| {
                is_within_shelf_life(schedule.end_of_synthesis(), injection_time, shelf)
            });

        debug!(
            product = %product.name,
            nuclide = %product.nuclide,
            route = %request.route.name,
            synthesis_start = %schedule.synthesis_start,
            production_activity,
            within_shelf_life,
            "Computed production plan"
        );

        Ok(ProductionPlan {
            schedule,
            calibration_time,
            production_activity,
            activity_at_delivery,
            within_shelf_life,
        })
    }

    /// Plans production and rejects plans whose synthesis starts before `now`.
    pub fn plan_feasible(
        &self,
        request: &ProductionRequest,
        now: DateTime<Utc>,
    ) -> CoreResult<ProductionPlan> {
        let plan = self.plan(request)?;
        check_feasibility(&plan.schedule, now)?;
        Ok(plan)
    }
}
