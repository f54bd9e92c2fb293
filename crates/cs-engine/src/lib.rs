//! cs-engine: cable cross-section sizing and thermal derating.
//!
//! The engine is a pure function of a [`SizingRequest`] and the static tables
//! in `cs-tables`. It is layered leaves-first:
//! - [`electrical`]: resistance, voltage drop and power loss for one size
//! - [`thermal`]: temperature rise and ampacity, behind the [`ThermalModel`] trait
//! - [`selection`]: recommended-size search and the safety verdict
//! - [`sizing`]: the public entry points tying the layers together
//!
//! This is a simplified single-conductor DC/resistive model. It does not model
//! skin effect, harmonics, bundling or regulatory derating tables.
//!
//! # Example
//!
//! ```
//! use cs_engine::{SafetyStatus, SizingRequest, compute_sizing};
//! use cs_core::units::{amps, m, mm2, volts};
//!
//! let request = SizingRequest {
//!     current: amps(10.0),
//!     distance: m(24.0),
//!     voltage: volts(12.0),
//!     cross_section: mm2(2.5),
//!     ..SizingRequest::default()
//! };
//!
//! let result = compute_sizing(&request).unwrap();
//! assert_eq!(result.status, SafetyStatus::Danger);
//! assert_eq!(result.recommended_size.mm2(), 25.0);
//! ```

pub mod electrical;
pub mod request;
pub mod result;
pub mod selection;
pub mod sizing;
pub mod thermal;
pub mod validate;

// Re-exports for ergonomics
pub use electrical::{Circuit, ElectricalMetrics};
pub use request::SizingRequest;
pub use result::{SizeRow, SizingResult};
pub use selection::{Recommendation, SafetyStatus, SizingWarning, VerdictInputs, classify, recommend_size};
pub use sizing::{compute_sizing, compute_sizing_with, size_table, size_table_with};
pub use thermal::{AmpacityEstimate, EmpiricalThermalModel, FALLBACK_AMPACITY_A, ThermalModel};
pub use validate::{ValidatedRequest, ValidationError, resolve_material, validate};

pub use cs_tables::{CrossSection, Material, MaterialProperties, SizeCatalog};
