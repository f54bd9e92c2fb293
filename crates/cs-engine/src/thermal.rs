//! Conductor temperature and ampacity estimates.
//!
//! The default [`EmpiricalThermalModel`] is a placeholder proportionality with
//! no standards basis. It is kept behind [`ThermalModel`] so a lookup-table
//! model can replace it without touching the electrical model or the verdict.

use crate::electrical::Circuit;
use cs_core::Tolerances;
use cs_tables::{CrossSection, MaterialProperties};

/// Ampacity reported when the estimate is undefined.
pub const FALLBACK_AMPACITY_A: f64 = 100.0;

/// Maximum current estimate for one conductor size.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmpacityEstimate {
    /// A real bound produced by the thermal model.
    Computed { amps: f64 },
    /// The model could not produce a finite positive bound; `amps` is the
    /// display ceiling and must be treated as advisory only.
    Fallback { amps: f64 },
}

impl AmpacityEstimate {
    pub fn amps(self) -> f64 {
        match self {
            AmpacityEstimate::Computed { amps } | AmpacityEstimate::Fallback { amps } => amps,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, AmpacityEstimate::Fallback { .. })
    }

    /// Wrap a raw estimate, substituting the fallback ceiling when it is not
    /// a finite positive number.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            AmpacityEstimate::Computed { amps: raw }
        } else {
            AmpacityEstimate::Fallback {
                amps: FALLBACK_AMPACITY_A,
            }
        }
    }
}

/// Thermal behaviour of a single conductor in still air.
pub trait ThermalModel: Send + Sync {
    /// Short identifier for logs and reports.
    fn name(&self) -> &'static str;

    /// Conductor temperature rise above ambient (°C) for a dissipated power.
    fn temperature_rise_c(&self, power_loss_w: f64, size: CrossSection) -> f64;

    /// Largest current that keeps the conductor at or below the material's
    /// maximum temperature.
    fn ampacity(
        &self,
        material: &MaterialProperties,
        circuit: &Circuit,
        size: CrossSection,
        ambient_c: f64,
    ) -> AmpacityEstimate;

    fn conductor_temperature_c(&self, ambient_c: f64, power_loss_w: f64, size: CrossSection) -> f64 {
        ambient_c + self.temperature_rise_c(power_loss_w, size)
    }
}

/// ΔT = P / (A · 0.5) · 2, and the matching ampacity bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmpiricalThermalModel;

impl EmpiricalThermalModel {
    const AREA_FACTOR: f64 = 0.5;
    const RISE_GAIN: f64 = 2.0;
}

impl ThermalModel for EmpiricalThermalModel {
    fn name(&self) -> &'static str {
        "empirical"
    }

    fn temperature_rise_c(&self, power_loss_w: f64, size: CrossSection) -> f64 {
        power_loss_w / (size.mm2() * Self::AREA_FACTOR) * Self::RISE_GAIN
    }

    fn ampacity(
        &self,
        material: &MaterialProperties,
        circuit: &Circuit,
        size: CrossSection,
        ambient_c: f64,
    ) -> AmpacityEstimate {
        let headroom_c = material.max_temperature_c - ambient_c;
        // Ambient at the limit must not leak unit-conversion noise into a tiny "real" bound
        if Tolerances::CONVERSION.close(headroom_c, 0.0) {
            tracing::debug!(ambient_c, "no thermal headroom, ampacity falls back");
            return AmpacityEstimate::from_raw(0.0);
        }

        let radicand = headroom_c * size.mm2() * Self::AREA_FACTOR
            / (material.resistivity_ohm_mm2_per_m * circuit.round_trip_m);
        let estimate = AmpacityEstimate::from_raw(radicand.sqrt());
        if estimate.is_fallback() {
            tracing::debug!(radicand, size_mm2 = size.mm2(), "ampacity undefined, using fallback");
        }
        estimate
    }
}
