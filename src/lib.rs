//! Decay-aware production scheduling for the U-Engine ecosystem.
//!
//! Converts between the activity needed at administration and the activity
//! that must exist at production, derives a backward production timetable
//! from a delivery deadline, and enforces the order and batch lifecycles.
//! Every operation is a pure function over caller-supplied values; the
//! crate holds no state and reads no clock.
//!
//! # Modules
//!
//! - **`decay`**: Exponential decay arithmetic, nuclide catalogue, production overage
//! - **`scheduler`**: Backward scheduling, feasibility against a caller's `now`,
//!   `ProductionPlanner`
//! - **`lifecycle`**: `OrderStatus` / `BatchStatus` transition tables
//! - **`models`**: `StageDurations`, `SchedulePlan`, `ProductProfile`, `DeliveryRoute`
//! - **`validation`**: Configuration checks (half-lives, durations, duplicates)
//! - **`error`**: `CoreError` taxonomy
//!
//! # Concurrency
//!
//! All functions are side-effect free and safe to call from any number of
//! threads. Callers persisting a status change must still guard their own
//! read-modify-write so two requests cannot both pass `can_transition`
//! against the same stale status.
//!
//! # References
//!
//! - Cherry, Sorenson & Phelps (2012), "Physics in Nuclear Medicine"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod decay;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{CoreError, CoreResult};
