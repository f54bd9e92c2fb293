//! Serializable sizing reports in practical units.

use cs_engine::{AmpacityEstimate, SafetyStatus, SizingResult, SizingWarning};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseReport {
    pub id: String,
    pub name: String,
    pub material: String,
    pub cross_section_mm2: f64,
    pub resistance_ohm: f64,
    pub voltage_drop_v: f64,
    pub voltage_drop_percent: f64,
    pub power_loss_w: f64,
    pub temperature_c: f64,
    pub recommended_mm2: f64,
    pub recommendation_meets_limit: bool,
    pub minimum_cross_section_mm2: f64,
    pub status: SafetyStatus,
    pub warnings: Vec<SizingWarning>,
    pub ampacity: AmpacityEstimate,
    pub load_ratio: f64,
}

impl CaseReport {
    pub fn from_result(id: &str, name: &str, result: &SizingResult) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            material: result.material.key().to_string(),
            cross_section_mm2: result.candidate.mm2(),
            resistance_ohm: result.resistance_ohm(),
            voltage_drop_v: result.voltage_drop_v(),
            voltage_drop_percent: result.voltage_drop_percent,
            power_loss_w: result.power_loss_w(),
            temperature_c: result.temperature_c(),
            recommended_mm2: result.recommended_size.mm2(),
            recommendation_meets_limit: result.recommendation_meets_limit,
            minimum_cross_section_mm2: result.minimum_cross_section_mm2,
            status: result.status,
            warnings: result.warnings.clone(),
            ampacity: result.ampacity,
            load_ratio: result.load_ratio(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub safe: usize,
    pub warning: usize,
    pub danger: usize,
}

impl StatusCounts {
    pub fn tally<'a>(reports: impl IntoIterator<Item = &'a CaseReport>) -> Self {
        let mut counts = Self::default();
        for report in reports {
            match report.status {
                SafetyStatus::Safe => counts.safe += 1,
                SafetyStatus::Warning => counts.warning += 1,
                SafetyStatus::Danger => counts.danger += 1,
            }
        }
        counts
    }

    /// The worst verdict present, `Safe` for an empty study.
    pub fn worst(&self) -> SafetyStatus {
        if self.danger > 0 {
            SafetyStatus::Danger
        } else if self.warning > 0 {
            SafetyStatus::Warning
        } else {
            SafetyStatus::Safe
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudyReport {
    pub name: String,
    pub counts: StatusCounts,
    pub cases: Vec<CaseReport>,
}

impl StudyReport {
    pub fn new(name: impl Into<String>, cases: Vec<CaseReport>) -> Self {
        Self {
            name: name.into(),
            counts: StatusCounts::tally(&cases),
            cases,
        }
    }
}
