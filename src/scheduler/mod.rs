//! Backward scheduling and production planning.
//!
//! # Algorithm
//!
//! `backward_schedule` subtracts stage durations from a delivery deadline
//! to find when each upstream stage must start. `ProductionPlanner`
//! combines that timetable with decay arithmetic to find how much activity
//! must be produced.
//!
//! # Feasibility
//!
//! Nothing here reads a clock. Whether a plan's synthesis start lies in the
//! past is decided by `check_feasibility` against a caller-supplied `now`.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod backward;
mod feasibility;
mod planner;

pub use backward::{backward_schedule, backward_schedule_stages, minutes_to_duration};
pub use feasibility::{check_feasibility, is_feasible, slack_minutes};
pub use planner::{CalibrationPoint, ProductionPlan, ProductionPlanner, ProductionRequest};
