//! Localised wording for verdicts and warnings.
//!
//! The engine only returns identifiers and numbers; wording lives here.

use clap::ValueEnum;
use cs_engine::{Material, SafetyStatus, SizingWarning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    En,
    Tr,
}

pub fn status_headline(status: SafetyStatus, lang: Lang) -> &'static str {
    match (status, lang) {
        (SafetyStatus::Safe, Lang::En) => "Safe Selection",
        (SafetyStatus::Safe, Lang::Tr) => "Güvenli Seçim",
        (SafetyStatus::Warning, Lang::En) => "Caution Required",
        (SafetyStatus::Warning, Lang::Tr) => "Dikkat Gerekli",
        (SafetyStatus::Danger, Lang::En) => "Danger! Not Suitable",
        (SafetyStatus::Danger, Lang::Tr) => "Tehlike! Uygun Değil",
    }
}

pub fn material_name(material: Material, lang: Lang) -> &'static str {
    let entry = material.catalog_entry();
    match lang {
        Lang::En => entry.display_name,
        Lang::Tr => entry.display_name_tr,
    }
}

pub fn warning(warning: &SizingWarning, lang: Lang) -> String {
    match (*warning, lang) {
        (
            SizingWarning::VoltageDropExceeded {
                actual_percent,
                limit_percent,
            },
            Lang::En,
        ) => format!("Voltage drop too high ({actual_percent:.1}% > {limit_percent}%)"),
        (
            SizingWarning::VoltageDropExceeded {
                actual_percent,
                limit_percent,
            },
            Lang::Tr,
        ) => format!("Voltaj düşümü çok yüksek ({actual_percent:.1}% > {limit_percent}%)"),
        (
            SizingWarning::OverTemperature {
                temperature_c,
                max_temperature_c,
            },
            Lang::En,
        ) => format!(
            "Cable temperature exceeds maximum allowed ({temperature_c:.1}°C > {max_temperature_c}°C)"
        ),
        (
            SizingWarning::OverTemperature {
                temperature_c,
                max_temperature_c,
            },
            Lang::Tr,
        ) => format!(
            "Kablo sıcaklığı izin verilen maksimumu aşıyor ({temperature_c:.1}°C > {max_temperature_c}°C)"
        ),
        (SizingWarning::ApproachingTemperatureLimit { temperature_c, .. }, Lang::En) => {
            format!("Cable temperature approaching safe limits ({temperature_c:.1}°C)")
        }
        (SizingWarning::ApproachingTemperatureLimit { temperature_c, .. }, Lang::Tr) => {
            format!("Kablo sıcaklığı güvenli limitlere yaklaşıyor ({temperature_c:.1}°C)")
        }
        (SizingWarning::LargerSizeRecommended { recommended_mm2, .. }, Lang::En) => {
            format!("Larger cross-section recommended ({recommended_mm2} mm²)")
        }
        (SizingWarning::LargerSizeRecommended { recommended_mm2, .. }, Lang::Tr) => {
            format!("Daha büyük kesit önerilir ({recommended_mm2} mm²)")
        }
    }
}

pub fn no_size_meets_limit(limit_percent: f64, lang: Lang) -> String {
    match lang {
        Lang::En => format!(
            "No standard size keeps the drop within {limit_percent}%; \
             the recommended size is only the smallest catalog entry."
        ),
        Lang::Tr => format!(
            "Hiçbir standart kesit gerilim düşümünü {limit_percent}% içinde tutmuyor; \
             önerilen kesit yalnızca katalogdaki en küçük kesittir."
        ),
    }
}

pub fn ampacity_fallback(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "could not be determined, display with caution",
        Lang::Tr => "belirlenemedi, dikkatle değerlendirin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_render_numbers_in_both_languages() {
        let w = SizingWarning::VoltageDropExceeded {
            actual_percent: 28.0,
            limit_percent: 3.0,
        };
        assert_eq!(warning(&w, Lang::En), "Voltage drop too high (28.0% > 3%)");
        assert!(warning(&w, Lang::Tr).contains("28.0%"));

        let w = SizingWarning::LargerSizeRecommended {
            candidate_mm2: 2.5,
            recommended_mm2: 25.0,
        };
        assert_eq!(warning(&w, Lang::En), "Larger cross-section recommended (25 mm²)");
    }

    #[test]
    fn headlines_differ_per_status() {
        assert_eq!(status_headline(SafetyStatus::Danger, Lang::En), "Danger! Not Suitable");
        assert_eq!(material_name(Material::Copper, Lang::Tr), "Bakır");
    }
}
