//! Conductor material definitions.

use crate::catalog::material_catalog;
use crate::error::{TableError, TableResult};
use core::fmt;
use core::str::FromStr;

/// Conductor metals the sizing engine knows about.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Annealed copper (Cu)
    Copper,
    /// Electrical-grade aluminum (Al)
    Aluminum,
}

/// Physical constants for one conductor material.
///
/// Resistivity is referenced at 20 °C. The maximum temperature is the
/// continuous rating of the PVC insulation class the table assumes.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    /// Resistivity ρ in Ω·mm²/m at 20 °C.
    pub resistivity_ohm_mm2_per_m: f64,
    /// Temperature coefficient of resistance α in 1/°C.
    pub temp_coefficient_per_c: f64,
    /// Maximum continuous conductor temperature in °C.
    pub max_temperature_c: f64,
    /// Ampacity relative to copper (copper = 1.0).
    pub ampacity_factor: f64,
}

const COPPER: MaterialProperties = MaterialProperties {
    resistivity_ohm_mm2_per_m: 0.0175,
    temp_coefficient_per_c: 0.00393,
    max_temperature_c: 70.0,
    ampacity_factor: 1.0,
};

const ALUMINUM: MaterialProperties = MaterialProperties {
    resistivity_ohm_mm2_per_m: 0.0283,
    temp_coefficient_per_c: 0.00403,
    max_temperature_c: 70.0,
    ampacity_factor: 0.78,
};

impl Material {
    pub const ALL: [Material; 2] = [Material::Copper, Material::Aluminum];

    /// Stable lowercase key used in request files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Material::Copper => "copper",
            Material::Aluminum => "aluminum",
        }
    }

    pub fn properties(self) -> &'static MaterialProperties {
        match self {
            Material::Copper => &COPPER,
            Material::Aluminum => &ALUMINUM,
        }
    }

    /// Resolve a key or alias (case-insensitive, surrounding whitespace ignored).
    pub fn from_key(key: &str) -> TableResult<Self> {
        let needle = key.trim().to_lowercase();
        material_catalog()
            .iter()
            .find(|entry| entry.matches_key(&needle))
            .map(|entry| entry.material)
            .ok_or_else(|| TableError::UnknownMaterial {
                key: key.to_string(),
            })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Material {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::from_key(s)
    }
}
