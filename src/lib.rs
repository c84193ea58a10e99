//! Carbon accounting for coal-mine activities.
//!
//! The core is two pure functions:
//!
//! - [`compute`] turns an [`ActivityInput`](model::ActivityInput) into an
//!   [`EmissionResult`](model::EmissionResult) in kg CO₂e.
//! - [`generate`] turns a category and an emissions figure into an ordered,
//!   never-empty list of [`Recommendation`](model::Recommendation)s.
//!
//! Around them sit the collaborators a caller needs: input validation,
//! everyday equivalents, a local report store, and CSV export.

pub mod calculator;
pub mod config;
pub mod context;
pub mod export;
pub mod logging;
pub mod model;
pub mod recommend;
pub mod storage;
pub mod validate;

pub use calculator::compute;
pub use recommend::generate;
