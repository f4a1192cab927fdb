//! Configuration loading tests.

use roi_core::config::{AutomationBaseline, RoiConfig};

fn temp_data_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("roi-config-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_baseline_file_falls_back_to_reference() {
    let dir = temp_data_dir("missing");
    let config = RoiConfig::load(dir.to_str().unwrap()).unwrap();

    assert_eq!(config.baseline, AutomationBaseline::default());
    assert_eq!(config.baseline.automated_cost_per_invoice, 0.20);
    assert_eq!(config.baseline.error_rate_auto, 0.001);
    assert_eq!(config.baseline.min_roi_boost_factor, 1.1);
}

#[test]
fn baseline_file_overrides_reference() {
    let dir = temp_data_dir("override");
    std::fs::write(
        dir.join("baseline.json"),
        r#"{ "automated_cost_per_invoice": 0.35, "error_rate_auto": 0.002, "min_roi_boost_factor": 1.0 }"#,
    )
    .unwrap();

    let config = RoiConfig::load(dir.to_str().unwrap()).unwrap();
    assert_eq!(config.baseline.automated_cost_per_invoice, 0.35);
    assert_eq!(config.baseline.error_rate_auto, 0.002);
    assert_eq!(config.baseline.min_roi_boost_factor, 1.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_baseline_file_is_an_error() {
    let dir = temp_data_dir("malformed");
    std::fs::write(dir.join("baseline.json"), "{ not json").unwrap();

    let err = RoiConfig::load(dir.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Cannot parse"), "{err}");

    let _ = std::fs::remove_dir_all(&dir);
}
