//! cs-core: stable foundation for cablesize.
//!
//! Contains:
//! - units (uom SI types + constructors in the units cable tables are quoted in)
//! - numeric (conversion tolerances, finiteness/positivity checks, percentages)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CsError, CsResult};
pub use numeric::*;
pub use units::*;
