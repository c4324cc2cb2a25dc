//! Production scheduling data types.
//!
//! Plain value types passed in by callers and returned by the scheduler.
//! None of them hold state beyond a single request.
//!
//! # Domain Mappings
//!
//! | u-decay-schedule | Radiopharmacy | Generic manufacturing |
//! |------------------|---------------|-----------------------|
//! | ProductProfile | Tracer (FDG, PSMA) | Product spec |
//! | DeliveryRoute | Courier route | Shipping lane |
//! | StageDurations | Synthesis/QC/dispense/transport | Routing times |
//! | SchedulePlan | Production timetable | Backward-scheduled plan |

mod plan;
mod profile;
mod stage;

pub use plan::SchedulePlan;
pub use profile::{DeliveryRoute, ProductProfile};
pub use stage::{Stage, StageDurations};
