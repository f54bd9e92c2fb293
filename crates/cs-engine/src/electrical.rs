//! Resistive DC model of a two-wire cable run.

use crate::validate::ValidatedRequest;
use cs_core::percent_of;
use cs_tables::{CrossSection, MaterialProperties};

/// A loaded cable run: material, length and operating point.
///
/// All formulas take the conductor size as a [`CrossSection`], which is
/// always a positive catalog value, so none of them can divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circuit {
    pub resistivity_ohm_mm2_per_m: f64,
    /// Out-and-back conductor length in metres.
    pub round_trip_m: f64,
    pub current_a: f64,
    pub supply_v: f64,
}

/// Electrical quantities of one conductor size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricalMetrics {
    pub resistance_ohm: f64,
    pub voltage_drop_v: f64,
    pub voltage_drop_percent: f64,
    pub power_loss_w: f64,
}

/// Current flows out and back, so the conductor is twice the run.
#[inline]
pub fn round_trip_length_m(one_way_m: f64) -> f64 {
    2.0 * one_way_m
}

impl Circuit {
    pub fn new(
        material: &MaterialProperties,
        one_way_m: f64,
        current_a: f64,
        supply_v: f64,
    ) -> Self {
        Self {
            resistivity_ohm_mm2_per_m: material.resistivity_ohm_mm2_per_m,
            round_trip_m: round_trip_length_m(one_way_m),
            current_a,
            supply_v,
        }
    }

    pub fn from_request(request: &ValidatedRequest) -> Self {
        Self::new(
            request.material.properties(),
            request.distance_m,
            request.current_a,
            request.voltage_v,
        )
    }

    /// R = ρ · L / A
    pub fn resistance_ohm(&self, size: CrossSection) -> f64 {
        self.resistivity_ohm_mm2_per_m * self.round_trip_m / size.mm2()
    }

    /// ΔV = I · R
    pub fn voltage_drop_v(&self, size: CrossSection) -> f64 {
        self.current_a * self.resistance_ohm(size)
    }

    pub fn voltage_drop_percent(&self, size: CrossSection) -> f64 {
        percent_of(self.voltage_drop_v(size), self.supply_v)
    }

    /// P = I² · R
    pub fn power_loss_w(&self, size: CrossSection) -> f64 {
        self.current_a * self.current_a * self.resistance_ohm(size)
    }

    pub fn evaluate(&self, size: CrossSection) -> ElectricalMetrics {
        let resistance_ohm = self.resistance_ohm(size);
        let voltage_drop_v = self.current_a * resistance_ohm;
        ElectricalMetrics {
            resistance_ohm,
            voltage_drop_v,
            voltage_drop_percent: percent_of(voltage_drop_v, self.supply_v),
            power_loss_w: self.current_a * self.current_a * resistance_ohm,
        }
    }

    /// Smallest continuous area (mm², not snapped to the catalog) that keeps
    /// the drop within `max_drop_percent`: A = ρ · L · I / ΔV_max.
    pub fn minimum_cross_section_mm2(&self, max_drop_percent: f64) -> f64 {
        let max_drop_v = self.supply_v * max_drop_percent / 100.0;
        self.resistivity_ohm_mm2_per_m * self.round_trip_m * self.current_a / max_drop_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_tables::{Material, SizeCatalog};

    fn reference_circuit() -> Circuit {
        // copper, 24 m one way, 10 A from 12 V
        Circuit::new(Material::Copper.properties(), 24.0, 10.0, 12.0)
    }

    fn size(mm2: f64) -> CrossSection {
        SizeCatalog::standard().lookup_mm2(mm2).unwrap()
    }

    #[test]
    fn round_trip_doubles_distance() {
        assert_eq!(round_trip_length_m(24.0), 48.0);
        assert_eq!(reference_circuit().round_trip_m, 48.0);
    }

    #[test]
    fn reference_run_at_two_and_a_half() {
        let metrics = reference_circuit().evaluate(size(2.5));
        assert!((metrics.resistance_ohm - 0.336).abs() < 1e-12);
        assert!((metrics.voltage_drop_v - 3.36).abs() < 1e-12);
        assert!((metrics.voltage_drop_percent - 28.0).abs() < 1e-9);
        assert!((metrics.power_loss_w - 33.6).abs() < 1e-9);
    }

    #[test]
    fn evaluate_agrees_with_individual_formulas() {
        let circuit = reference_circuit();
        for s in SizeCatalog::standard().iter() {
            let metrics = circuit.evaluate(s);
            assert_eq!(metrics.resistance_ohm, circuit.resistance_ohm(s));
            assert_eq!(metrics.voltage_drop_v, circuit.voltage_drop_v(s));
            assert_eq!(metrics.voltage_drop_percent, circuit.voltage_drop_percent(s));
            assert_eq!(metrics.power_loss_w, circuit.power_loss_w(s));
        }
    }

    #[test]
    fn minimum_cross_section_for_reference_run() {
        // 0.0175 · 48 · 10 / 0.36
        let min = reference_circuit().minimum_cross_section_mm2(3.0);
        assert!((min - 23.333_333_333_333_332).abs() < 1e-9);
    }
}
