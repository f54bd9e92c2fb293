//! Sizing outputs.

use crate::selection::{SafetyStatus, SizingWarning};
use crate::thermal::AmpacityEstimate;
use cs_core::units::{Current, Power, Resistance, Temperature, Voltage, read};
use cs_core::unit_clamp;
use cs_tables::{CrossSection, Material};

/// Everything the engine reports for one request. Built fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingResult {
    pub material: Material,
    pub current: Current,
    /// The size the request asked about.
    pub candidate: CrossSection,
    pub resistance: Resistance,
    pub voltage_drop: Voltage,
    pub voltage_drop_percent: f64,
    pub power_loss: Power,
    /// Estimated steady conductor temperature.
    pub temperature: Temperature,
    pub recommended_size: CrossSection,
    /// See [`Recommendation::meets_limit`](crate::Recommendation::meets_limit).
    pub recommendation_meets_limit: bool,
    /// Unsnapped analytic minimum area for the voltage-drop limit, mm².
    pub minimum_cross_section_mm2: f64,
    pub status: SafetyStatus,
    pub warnings: Vec<SizingWarning>,
    pub ampacity: AmpacityEstimate,
}

impl SizingResult {
    pub fn resistance_ohm(&self) -> f64 {
        read::ohm(self.resistance)
    }

    pub fn voltage_drop_v(&self) -> f64 {
        read::v(self.voltage_drop)
    }

    pub fn power_loss_w(&self) -> f64 {
        read::w(self.power_loss)
    }

    pub fn temperature_c(&self) -> f64 {
        read::celsius(self.temperature)
    }

    /// Load current as a share of ampacity, clamped to `[0, 1]`.
    ///
    /// Uses the fallback ceiling when ampacity is undetermined, so check
    /// [`AmpacityEstimate::is_fallback`] before relying on it.
    pub fn load_ratio(&self) -> f64 {
        unit_clamp(read::a(self.current) / self.ampacity.amps())
    }
}

/// One row of a catalog sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRow {
    pub size: CrossSection,
    pub resistance_ohm: f64,
    pub voltage_drop_v: f64,
    pub voltage_drop_percent: f64,
    pub power_loss_w: f64,
    pub temperature_c: f64,
    pub ampacity: AmpacityEstimate,
    pub within_drop_limit: bool,
    pub within_temperature_limit: bool,
}
