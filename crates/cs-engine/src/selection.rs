//! Recommended-size search and the safety verdict.

use crate::electrical::Circuit;
use cs_tables::{CrossSection, SizeCatalog};
use core::fmt;

/// Share of the material maximum above which a conductor is "running hot".
pub const APPROACHING_LIMIT_FRACTION: f64 = 0.8;

/// Result of the recommended-size search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub size: CrossSection,
    /// `false` when no catalog size met the limit and `size` is the
    /// smallest-size fallback.
    pub meets_limit: bool,
}

/// Walk the catalog in ascending order and return the first size whose
/// voltage drop is within `max_drop_percent`.
///
/// When nothing qualifies the smallest catalog size is returned with
/// `meets_limit = false`; callers should surface the flag rather than show
/// the size as a fix.
pub fn recommend_size(
    circuit: &Circuit,
    catalog: &SizeCatalog,
    max_drop_percent: f64,
) -> Recommendation {
    for size in catalog.iter() {
        let drop_percent = circuit.voltage_drop_percent(size);
        tracing::trace!(size_mm2 = size.mm2(), drop_percent, "recommendation candidate");
        if drop_percent <= max_drop_percent {
            return Recommendation {
                size,
                meets_limit: true,
            };
        }
    }

    let smallest = catalog.smallest();
    tracing::debug!(
        max_drop_percent,
        fallback_mm2 = smallest.mm2(),
        "no catalog size meets the voltage-drop limit"
    );
    Recommendation {
        size: smallest,
        meets_limit: false,
    }
}

/// Overall verdict. Ordered so that `max` is the lattice join.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SafetyStatus {
    #[default]
    Safe,
    Warning,
    Danger,
}

impl SafetyStatus {
    /// Join two verdicts; the more severe wins.
    pub fn join(self, other: SafetyStatus) -> SafetyStatus {
        self.max(other)
    }

    pub fn label(self) -> &'static str {
        match self {
            SafetyStatus::Safe => "safe",
            SafetyStatus::Warning => "warning",
            SafetyStatus::Danger => "danger",
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reason the verdict is not `safe`.
///
/// Carries the numbers needed to render a message; wording and number
/// formatting belong to the presentation layer.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingWarning {
    VoltageDropExceeded {
        actual_percent: f64,
        limit_percent: f64,
    },
    OverTemperature {
        temperature_c: f64,
        max_temperature_c: f64,
    },
    ApproachingTemperatureLimit {
        temperature_c: f64,
        threshold_c: f64,
        max_temperature_c: f64,
    },
    LargerSizeRecommended {
        candidate_mm2: f64,
        recommended_mm2: f64,
    },
}

impl SizingWarning {
    /// Stable identifier, suitable as a translation key.
    pub fn code(&self) -> &'static str {
        match self {
            SizingWarning::VoltageDropExceeded { .. } => "voltage_drop_exceeded",
            SizingWarning::OverTemperature { .. } => "over_temperature",
            SizingWarning::ApproachingTemperatureLimit { .. } => "approaching_temperature_limit",
            SizingWarning::LargerSizeRecommended { .. } => "larger_size_recommended",
        }
    }

    /// The status this warning alone forces.
    pub fn severity(&self) -> SafetyStatus {
        match self {
            SizingWarning::VoltageDropExceeded { .. } | SizingWarning::OverTemperature { .. } => {
                SafetyStatus::Danger
            }
            SizingWarning::ApproachingTemperatureLimit { .. }
            | SizingWarning::LargerSizeRecommended { .. } => SafetyStatus::Warning,
        }
    }
}

/// Everything the verdict looks at, for the candidate size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictInputs {
    pub voltage_drop_percent: f64,
    pub max_voltage_drop_percent: f64,
    pub temperature_c: f64,
    pub max_temperature_c: f64,
    pub candidate: CrossSection,
    pub recommended: CrossSection,
}

/// Classify the candidate size. Rules run in a fixed order so the warning
/// list is stable; the status is the join of every triggered rule.
pub fn classify(inputs: &VerdictInputs) -> (SafetyStatus, Vec<SizingWarning>) {
    let mut warnings = Vec::new();

    if inputs.voltage_drop_percent > inputs.max_voltage_drop_percent {
        warnings.push(SizingWarning::VoltageDropExceeded {
            actual_percent: inputs.voltage_drop_percent,
            limit_percent: inputs.max_voltage_drop_percent,
        });
    }

    let threshold_c = inputs.max_temperature_c * APPROACHING_LIMIT_FRACTION;
    if inputs.temperature_c > inputs.max_temperature_c {
        warnings.push(SizingWarning::OverTemperature {
            temperature_c: inputs.temperature_c,
            max_temperature_c: inputs.max_temperature_c,
        });
    } else if inputs.temperature_c > threshold_c {
        warnings.push(SizingWarning::ApproachingTemperatureLimit {
            temperature_c: inputs.temperature_c,
            threshold_c,
            max_temperature_c: inputs.max_temperature_c,
        });
    }

    if inputs.candidate < inputs.recommended {
        warnings.push(SizingWarning::LargerSizeRecommended {
            candidate_mm2: inputs.candidate.mm2(),
            recommended_mm2: inputs.recommended.mm2(),
        });
    }

    let status = warnings
        .iter()
        .map(SizingWarning::severity)
        .fold(SafetyStatus::Safe, SafetyStatus::join);
    (status, warnings)
}
