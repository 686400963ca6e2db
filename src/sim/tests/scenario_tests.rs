//! Scenario files loaded from disk and replayed end to end

use harvest_core::Response;
use harvest_sim::{ScenarioConfig, ScenarioRunner};
use std::io::Write;
use std::path::PathBuf;

fn bundled(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

#[test]
fn test_bundled_certification_lifecycle() {
    let config = ScenarioConfig::load(bundled("certification_lifecycle.toml")).unwrap();
    config.validate().unwrap();

    let mut runner = ScenarioRunner::new(&config);
    let report = runner.run(&config).unwrap();

    assert!(report.is_success(), "failures: {:?}", report.failures().collect::<Vec<_>>());
    assert_eq!(runner.simulator().certifications().product_count(), 1);
    assert_eq!(runner.simulator().context().block_height, 1200);
}

#[test]
fn test_bundled_producer_verification() {
    let config = ScenarioConfig::load(bundled("producer_verification.toml")).unwrap();
    config.validate().unwrap();

    let mut runner = ScenarioRunner::new(&config);
    let report = runner.run(&config).unwrap();

    assert!(report.is_success(), "failures: {:?}", report.failures().collect::<Vec<_>>());
    assert_eq!(report.outcomes.len(), 8);
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[simulator]
owner = "ST1OWNER"
block_height = 7

[[steps]]
contract = "producer-verification"
method = "register-producer"
args = ["ST2FARM", "Farm", "Kansas"]
expect = {{ type = "ok", value = true }}
"#
    )
    .unwrap();

    let config = ScenarioConfig::load(file.path()).unwrap();
    let mut runner = ScenarioRunner::new(&config);
    let report = runner.run(&config).unwrap();

    assert_eq!(report.outcomes[0].response, Response::ok(true));
    let producer = runner
        .simulator()
        .producers()
        .producer(&"ST2FARM".into())
        .unwrap();
    assert_eq!(producer.registration_date, 7);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ScenarioConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.toml"));
}

#[test]
fn test_report_serializes_as_json_lines() {
    let config = ScenarioConfig::load(bundled("certification_lifecycle.toml")).unwrap();
    let mut runner = ScenarioRunner::new(&config);
    let report = runner.run(&config).unwrap();

    let line = serde_json::to_value(&report.outcomes[1]).unwrap();
    assert_eq!(line["response"], serde_json::json!({ "type": "err", "value": 2 }));
    assert_eq!(line["block_height"], 100);
}
