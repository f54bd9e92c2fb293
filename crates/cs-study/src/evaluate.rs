//! Batch evaluation of study cases.
//!
//! Sizing is pure, so cases fan out across the rayon pool with no
//! coordination; output keeps the order of the study file.

use crate::report::{CaseReport, StudyReport};
use crate::schema::{CaseDef, Study};
use crate::validate::{StudyValidationError, validate_study};
use crate::StudyResult;
use cs_engine::compute_sizing;
use rayon::prelude::*;

pub fn evaluate_case(case: &CaseDef) -> Result<CaseReport, StudyValidationError> {
    let wrap = |source| StudyValidationError::Case {
        id: case.id.clone(),
        source,
    };
    let request = case.to_request().map_err(wrap)?;
    let result = compute_sizing(&request).map_err(wrap)?;
    Ok(CaseReport::from_result(&case.id, case.display_name(), &result))
}

pub fn evaluate_study(study: &Study) -> StudyResult<StudyReport> {
    validate_study(study)?;
    tracing::info!(study = %study.name, cases = study.cases.len(), "evaluating study");

    let cases = study
        .cases
        .par_iter()
        .map(evaluate_case)
        .collect::<Result<Vec<_>, _>>()?;

    let report = StudyReport::new(study.name.clone(), cases);
    tracing::debug!(
        safe = report.counts.safe,
        warning = report.counts.warning,
        danger = report.counts.danger,
        "study evaluated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LATEST_VERSION;
    use cs_engine::SafetyStatus;

    #[test]
    fn evaluation_preserves_case_order() {
        let ids: Vec<String> = (0..32).map(|i| format!("case-{i:02}")).collect();
        let study = Study {
            version: LATEST_VERSION,
            name: "order".into(),
            description: None,
            cases: ids
                .iter()
                .enumerate()
                .map(|(i, id)| CaseDef {
                    current_a: 1.0 + i as f64,
                    ..CaseDef::new(id.clone())
                })
                .collect(),
        };

        let report = evaluate_study(&study).unwrap();
        let got: Vec<_> = report.cases.iter().map(|c| c.id.clone()).collect();
        assert_eq!(got, ids);
        assert_eq!(
            report.counts.safe + report.counts.warning + report.counts.danger,
            32
        );
    }

    #[test]
    fn single_case_report_matches_engine() {
        let case = CaseDef {
            current_a: 10.0,
            distance_m: 24.0,
            cross_section_mm2: 25.0,
            ..CaseDef::new("ref")
        };
        let report = evaluate_case(&case).unwrap();
        assert_eq!(report.status, SafetyStatus::Safe);
        assert_eq!(report.recommended_mm2, 25.0);
        assert_eq!(report.material, "copper");
        assert_eq!(report.name, "ref");
    }
}
