//! Study file schema.
//!
//! Fields carry their unit in the name. Everything except a case `id` falls
//! back to the calculator defaults, so the smallest valid case is:
//!
//! ```yaml
//! - id: garage
//!   current_a: 16
//!   distance_m: 30
//! ```

use cs_core::units::{amps, celsius, m, mm2, volts};
use cs_engine::{SizingRequest, ValidationError, resolve_material};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "defaults::current_a")]
    pub current_a: f64,
    #[serde(default = "defaults::distance_m")]
    pub distance_m: f64,
    #[serde(default = "defaults::voltage_v")]
    pub voltage_v: f64,
    #[serde(default = "defaults::material")]
    pub material: String,
    #[serde(default = "defaults::max_voltage_drop_percent")]
    pub max_voltage_drop_percent: f64,
    #[serde(default = "defaults::ambient_c")]
    pub ambient_c: f64,
    #[serde(default = "defaults::cross_section_mm2")]
    pub cross_section_mm2: f64,
}

mod defaults {
    pub fn current_a() -> f64 {
        10.0
    }
    pub fn distance_m() -> f64 {
        10.0
    }
    pub fn voltage_v() -> f64 {
        12.0
    }
    pub fn material() -> String {
        "copper".to_string()
    }
    pub fn max_voltage_drop_percent() -> f64 {
        3.0
    }
    pub fn ambient_c() -> f64 {
        25.0
    }
    pub fn cross_section_mm2() -> f64 {
        2.5
    }
}

impl CaseDef {
    /// A case with calculator defaults for every field.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            current_a: defaults::current_a(),
            distance_m: defaults::distance_m(),
            voltage_v: defaults::voltage_v(),
            material: defaults::material(),
            max_voltage_drop_percent: defaults::max_voltage_drop_percent(),
            ambient_c: defaults::ambient_c(),
            cross_section_mm2: defaults::cross_section_mm2(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Build the engine request. Only the material key can fail here; the
    /// numeric checks happen when the engine validates the request.
    pub fn to_request(&self) -> Result<SizingRequest, ValidationError> {
        Ok(SizingRequest {
            current: amps(self.current_a),
            distance: m(self.distance_m),
            voltage: volts(self.voltage_v),
            material: resolve_material(&self.material)?,
            max_voltage_drop_percent: self.max_voltage_drop_percent,
            ambient: celsius(self.ambient_c),
            cross_section: mm2(self.cross_section_mm2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_engine::Material;

    #[test]
    fn missing_fields_take_calculator_defaults() {
        let case: CaseDef = serde_yaml::from_str("id: a\n").unwrap();
        assert_eq!(case, CaseDef::new("a"));
        assert_eq!(case.to_request().unwrap().material, Material::Copper);
    }

    #[test]
    fn unknown_material_fails_conversion() {
        let case = CaseDef {
            material: "gold".into(),
            ..CaseDef::new("a")
        };
        assert_eq!(
            case.to_request(),
            Err(ValidationError::UnknownMaterial { key: "gold".into() })
        );
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut case = CaseDef::new("pump");
        assert_eq!(case.display_name(), "pump");
        case.name = Some("Well pump".into());
        assert_eq!(case.display_name(), "Well pump");
    }
}
