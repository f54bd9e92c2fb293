//! Sizing request: one immutable set of calculator inputs.

use cs_core::units::{Area, Current, Length, Temperature, Voltage, amps, celsius, m, mm2, volts};
use cs_tables::Material;

/// Inputs for one sizing computation.
///
/// Built fresh for every parameter change and handed to
/// [`compute_sizing`](crate::compute_sizing); the engine never keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingRequest {
    /// Load current drawn through the conductor.
    pub current: Current,
    /// One-way run from source to load.
    pub distance: Length,
    /// Supply voltage at the source.
    pub voltage: Voltage,
    pub material: Material,
    /// Largest acceptable voltage drop as a percentage of `voltage`.
    pub max_voltage_drop_percent: f64,
    pub ambient: Temperature,
    /// Candidate conductor size under evaluation; must be a catalog size.
    pub cross_section: Area,
}

impl Default for SizingRequest {
    /// The calculator's reset state.
    fn default() -> Self {
        Self {
            current: amps(10.0),
            distance: m(10.0),
            voltage: volts(12.0),
            material: Material::Copper,
            max_voltage_drop_percent: 3.0,
            ambient: celsius(25.0),
            cross_section: mm2(2.5),
        }
    }
}
