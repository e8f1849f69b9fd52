//! ht-core: stable foundation for heliotherm.
//!
//! Contains:
//! - constants (physical constants shared by the engine)
//! - units (uom SI types + constructors, boundary conversions)
//! - numeric (finite and range checks)
//! - error (shared error types)
//! - timing (run-phase timers, opt-in output)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::*;
pub use error::{HtError, HtResult};
pub use numeric::*;
pub use units::*;
