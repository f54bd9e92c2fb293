//! Study validation logic.

use crate::LATEST_VERSION;
use crate::schema::{CaseDef, Study};
use cs_engine::{SizeCatalog, ValidationError, validate};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StudyValidationError {
    #[error("Unsupported version: {version} (latest is {latest})")]
    UnsupportedVersion { version: u32, latest: u32 },

    #[error("Duplicate case ID: {id}")]
    DuplicateId { id: String },

    #[error("Case ID must not be empty (case #{index})")]
    EmptyId { index: usize },

    #[error("Case '{id}': {source}")]
    Case {
        id: String,
        #[source]
        source: ValidationError,
    },
}

pub fn validate_study(study: &Study) -> Result<(), StudyValidationError> {
    if study.version == 0 || study.version > LATEST_VERSION {
        return Err(StudyValidationError::UnsupportedVersion {
            version: study.version,
            latest: LATEST_VERSION,
        });
    }

    let mut ids = HashSet::new();
    for (index, case) in study.cases.iter().enumerate() {
        if case.id.trim().is_empty() {
            return Err(StudyValidationError::EmptyId { index });
        }
        if !ids.insert(case.id.as_str()) {
            return Err(StudyValidationError::DuplicateId {
                id: case.id.clone(),
            });
        }
        validate_case(case)?;
    }

    Ok(())
}

pub(crate) fn validate_case(case: &CaseDef) -> Result<(), StudyValidationError> {
    let wrap = |source| StudyValidationError::Case {
        id: case.id.clone(),
        source,
    };
    let request = case.to_request().map_err(wrap)?;
    validate(&request, SizeCatalog::standard()).map_err(wrap)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study(cases: Vec<CaseDef>) -> Study {
        Study {
            version: LATEST_VERSION,
            name: "test".into(),
            description: None,
            cases,
        }
    }

    #[test]
    fn empty_study_is_valid() {
        assert_eq!(validate_study(&study(vec![])), Ok(()));
    }

    #[test]
    fn future_version_is_rejected() {
        let mut s = study(vec![]);
        s.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_study(&s),
            Err(StudyValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let s = study(vec![CaseDef::new("a"), CaseDef::new("a")]);
        assert_eq!(
            validate_study(&s),
            Err(StudyValidationError::DuplicateId { id: "a".into() })
        );
    }

    #[test]
    fn blank_id_is_rejected() {
        let s = study(vec![CaseDef::new("  ")]);
        assert_eq!(
            validate_study(&s),
            Err(StudyValidationError::EmptyId { index: 0 })
        );
    }

    #[test]
    fn invalid_case_names_the_case() {
        let s = study(vec![CaseDef {
            cross_section_mm2: 3.3,
            ..CaseDef::new("odd-size")
        }]);
        match validate_study(&s) {
            Err(StudyValidationError::Case { id, source }) => {
                assert_eq!(id, "odd-size");
                assert!(matches!(source, ValidationError::SizeNotInCatalog { .. }));
            }
            other => panic!("expected case error, got {other:?}"),
        }
    }
}
