use cs_engine::SafetyStatus;
use std::path::Path;

#[test]
fn bundled_studies_load_and_evaluate() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../studies");
    let studies = ["workshop.yaml", "boat.json"];

    for name in studies {
        let path = root.join(name);
        let study = cs_study::load(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        let report = cs_study::evaluate_study(&study)
            .unwrap_or_else(|e| panic!("Failed to evaluate {}: {}", name, e));
        assert_eq!(report.cases.len(), study.cases.len());
    }
}

#[test]
fn workshop_verdicts() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../studies");
    let study = cs_study::load(&root.join("workshop.yaml")).unwrap();
    let report = cs_study::evaluate_study(&study).unwrap();

    let status = |id: &str| {
        report
            .cases
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.status)
            .unwrap()
    };
    assert_eq!(status("reference-run"), SafetyStatus::Danger);
    assert_eq!(status("reference-run-upsized"), SafetyStatus::Safe);
    assert_eq!(report.counts.worst(), SafetyStatus::Danger);
}

#[test]
fn report_serializes_warning_codes() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../studies");
    let study = cs_study::load(&root.join("workshop.yaml")).unwrap();
    let report = cs_study::evaluate_study(&study).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    let first = &json["cases"][0];
    assert_eq!(first["status"], "danger");
    assert_eq!(first["warnings"][0]["code"], "voltage_drop_exceeded");
    assert_eq!(first["ampacity"]["kind"], "computed");
}
