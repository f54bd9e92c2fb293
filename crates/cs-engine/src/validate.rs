//! Boundary validation for sizing requests.
//!
//! Every check happens here, before any formula runs. Inputs are never
//! clamped: a bad value is an error.

use crate::request::SizingRequest;
use cs_core::units::read;
use cs_core::{CsError, ensure_finite, ensure_positive};
use cs_tables::{CrossSection, Material, SizeCatalog, TableError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Maximum voltage drop must be in (0, 100] percent (got {value})")]
    VoltageDropLimitOutOfRange { value: f64 },

    #[error("Unknown conductor material '{key}'")]
    UnknownMaterial { key: String },

    #[error("Cross-section {mm2} mm² is not a standard catalog size")]
    SizeNotInCatalog { mm2: f64 },

    #[error("Inputs too large to evaluate: {what} is not finite")]
    Overflow { what: &'static str },
}

impl From<TableError> for ValidationError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::UnknownMaterial { key } => ValidationError::UnknownMaterial { key },
            TableError::SizeNotInCatalog { mm2 } => ValidationError::SizeNotInCatalog { mm2 },
        }
    }
}

impl From<ValidationError> for CsError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::NonFinite { field, value } => CsError::NonFinite { what: field, value },
            ValidationError::NonPositive { field, value } => CsError::NonPositive { what: field, value },
            ValidationError::UnknownMaterial { key } => CsError::NotFound {
                what: format!("conductor material '{}'", key),
            },
            other => CsError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}

/// A request whose every field has passed validation, in practical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    pub current_a: f64,
    pub distance_m: f64,
    pub voltage_v: f64,
    pub material: Material,
    pub max_voltage_drop_percent: f64,
    pub ambient_c: f64,
    pub candidate: CrossSection,
}

/// Resolve a material key at the boundary.
pub fn resolve_material(key: &str) -> Result<Material, ValidationError> {
    Ok(Material::from_key(key)?)
}

fn finite(value: f64, field: &'static str) -> Result<f64, ValidationError> {
    ensure_finite(value, field).map_err(|_| ValidationError::NonFinite { field, value })
}

fn positive(value: f64, field: &'static str) -> Result<f64, ValidationError> {
    ensure_positive(value, field).map_err(|err| match err {
        CsError::NonPositive { .. } => ValidationError::NonPositive { field, value },
        _ => ValidationError::NonFinite { field, value },
    })
}

/// Check a request against `catalog`, returning it in practical units.
pub fn validate(
    request: &SizingRequest,
    catalog: &SizeCatalog,
) -> Result<ValidatedRequest, ValidationError> {
    let current_a = positive(read::a(request.current), "current")?;
    let distance_m = positive(read::m(request.distance), "distance")?;
    let voltage_v = positive(read::v(request.voltage), "voltage")?;

    let max_voltage_drop_percent = finite(
        request.max_voltage_drop_percent,
        "maximum voltage drop percent",
    )?;
    if !(max_voltage_drop_percent > 0.0 && max_voltage_drop_percent <= 100.0) {
        return Err(ValidationError::VoltageDropLimitOutOfRange {
            value: max_voltage_drop_percent,
        });
    }

    let ambient_c = finite(read::celsius(request.ambient), "ambient temperature")?;
    let candidate = catalog.lookup(request.cross_section)?;

    Ok(ValidatedRequest {
        current_a,
        distance_m,
        voltage_v,
        material: request.material,
        max_voltage_drop_percent,
        ambient_c,
        candidate,
    })
}
