//! Public entry points.

use crate::electrical::Circuit;
use crate::request::SizingRequest;
use crate::result::{SizeRow, SizingResult};
use crate::selection::{VerdictInputs, classify, recommend_size};
use crate::thermal::{EmpiricalThermalModel, ThermalModel};
use crate::validate::{ValidatedRequest, ValidationError, validate};
use cs_core::units::{amps, celsius, ohms, volts, watts};
use cs_tables::SizeCatalog;

/// Size a cable run with the default thermal model and the standard catalog.
pub fn compute_sizing(request: &SizingRequest) -> Result<SizingResult, ValidationError> {
    compute_sizing_with(&EmpiricalThermalModel, request)
}

/// Size a cable run with a caller-supplied thermal model.
pub fn compute_sizing_with(
    thermal: &dyn ThermalModel,
    request: &SizingRequest,
) -> Result<SizingResult, ValidationError> {
    let catalog = SizeCatalog::standard();
    let validated = validate(request, catalog)?;
    evaluate(thermal, catalog, &validated)
}

fn finite(value: f64, what: &'static str) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::Overflow { what })
    }
}

fn evaluate(
    thermal: &dyn ThermalModel,
    catalog: &SizeCatalog,
    request: &ValidatedRequest,
) -> Result<SizingResult, ValidationError> {
    let material = request.material.properties();
    let circuit = Circuit::from_request(request);
    let candidate = request.candidate;

    let metrics = circuit.evaluate(candidate);
    let power_loss_w = finite(metrics.power_loss_w, "power loss")?;
    let voltage_drop_v = finite(metrics.voltage_drop_v, "voltage drop")?;
    let voltage_drop_percent = finite(metrics.voltage_drop_percent, "voltage drop percent")?;
    let temperature_c = finite(
        thermal.conductor_temperature_c(request.ambient_c, power_loss_w, candidate),
        "conductor temperature",
    )?;

    let minimum_cross_section_mm2 = finite(
        circuit.minimum_cross_section_mm2(request.max_voltage_drop_percent),
        "minimum cross-section",
    )?;

    let recommendation = recommend_size(&circuit, catalog, request.max_voltage_drop_percent);

    let (status, warnings) = classify(&VerdictInputs {
        voltage_drop_percent,
        max_voltage_drop_percent: request.max_voltage_drop_percent,
        temperature_c,
        max_temperature_c: material.max_temperature_c,
        candidate,
        recommended: recommendation.size,
    });

    let ampacity = thermal.ampacity(material, &circuit, candidate, request.ambient_c);

    tracing::debug!(
        material = %request.material,
        candidate_mm2 = candidate.mm2(),
        recommended_mm2 = recommendation.size.mm2(),
        voltage_drop_percent,
        temperature_c,
        status = %status,
        thermal_model = thermal.name(),
        "sizing evaluated"
    );

    Ok(SizingResult {
        material: request.material,
        current: amps(request.current_a),
        candidate,
        resistance: ohms(metrics.resistance_ohm),
        voltage_drop: volts(voltage_drop_v),
        voltage_drop_percent,
        power_loss: watts(power_loss_w),
        temperature: celsius(temperature_c),
        recommended_size: recommendation.size,
        recommendation_meets_limit: recommendation.meets_limit,
        minimum_cross_section_mm2,
        status,
        warnings,
        ampacity,
    })
}

/// Evaluate every catalog size for the request's run, smallest first.
///
/// The candidate size is validated but otherwise ignored.
pub fn size_table(request: &SizingRequest) -> Result<Vec<SizeRow>, ValidationError> {
    size_table_with(&EmpiricalThermalModel, request)
}

pub fn size_table_with(
    thermal: &dyn ThermalModel,
    request: &SizingRequest,
) -> Result<Vec<SizeRow>, ValidationError> {
    let catalog = SizeCatalog::standard();
    let validated = validate(request, catalog)?;
    let material = validated.material.properties();
    let circuit = Circuit::from_request(&validated);

    catalog
        .iter()
        .map(|size| {
            let metrics = circuit.evaluate(size);
            let power_loss_w = finite(metrics.power_loss_w, "power loss")?;
            let temperature_c = finite(
                thermal.conductor_temperature_c(validated.ambient_c, power_loss_w, size),
                "conductor temperature",
            )?;
            Ok(SizeRow {
                size,
                resistance_ohm: metrics.resistance_ohm,
                voltage_drop_v: metrics.voltage_drop_v,
                voltage_drop_percent: metrics.voltage_drop_percent,
                power_loss_w,
                temperature_c,
                ampacity: thermal.ampacity(material, &circuit, size, validated.ambient_c),
                within_drop_limit: metrics.voltage_drop_percent
                    <= validated.max_voltage_drop_percent,
                within_temperature_limit: temperature_c <= material.max_temperature_c,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SafetyStatus;
    use cs_core::units::{m, mm2};

    fn reference(size_mm2: f64) -> SizingRequest {
        SizingRequest {
            current: amps(10.0),
            distance: m(24.0),
            voltage: volts(12.0),
            cross_section: mm2(size_mm2),
            ..SizingRequest::default()
        }
    }

    #[test]
    fn reference_scenario() {
        let result = compute_sizing(&reference(2.5)).unwrap();
        assert!((result.resistance_ohm() - 0.336).abs() < 1e-9);
        assert!((result.voltage_drop_v() - 3.36).abs() < 1e-9);
        assert!((result.voltage_drop_percent - 28.0).abs() < 1e-9);
        assert_eq!(result.status, SafetyStatus::Danger);
        assert_eq!(result.recommended_size.mm2(), 25.0);
        assert!(result.recommendation_meets_limit);
        assert_eq!(result.candidate.mm2(), 2.5);
    }

    #[test]
    fn overflowing_inputs_are_reported() {
        let request = SizingRequest {
            current: amps(1e200),
            ..reference(2.5)
        };
        assert!(matches!(
            compute_sizing(&request),
            Err(ValidationError::Overflow { .. })
        ));
    }

    #[test]
    fn unbounded_minimum_area_is_reported() {
        // 1e-308 % of 1 V leaves a subnormal drop budget
        let request = SizingRequest {
            current: amps(1e10),
            distance: m(1e10),
            voltage: volts(1.0),
            max_voltage_drop_percent: 1e-308,
            ..reference(2.5)
        };
        assert_eq!(
            compute_sizing(&request),
            Err(ValidationError::Overflow {
                what: "minimum cross-section"
            })
        );
    }

    #[test]
    fn size_table_covers_the_catalog() {
        let rows = size_table(&reference(2.5)).unwrap();
        assert_eq!(rows.len(), SizeCatalog::standard().len());
        let first_ok = rows.iter().find(|row| row.within_drop_limit).unwrap();
        assert_eq!(first_ok.size.mm2(), 25.0);
        for pair in rows.windows(2) {
            assert!(pair[0].resistance_ohm > pair[1].resistance_ohm);
        }
    }
}
