//! Core data model for minecarbon.
//!
//! Activity inputs flow into the calculator, emission results flow into the
//! recommendation generator, and all three are bundled into saved reports.

mod activity;
mod emission;
mod recommendation;
mod report;

pub use activity::{Activity, ActivityInput, Category, FuelType, TransportMode};
pub use emission::EmissionResult;
pub use recommendation::{Priority, Recommendation};
pub use report::Report;
