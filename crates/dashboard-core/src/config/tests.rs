use std::path::PathBuf;

use super::*;

#[test]
fn defaults_point_at_working_directory_artifacts() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.scaler_path, PathBuf::from("scaler_final.json"));
    assert_eq!(cfg.model_path, PathBuf::from("knn_final_model.json"));
    assert!(cfg.color);
}

#[test]
fn file_config_overrides_artifact_paths() {
    let mut cfg = DashboardConfig::default();
    cfg.apply_file_toml(
        r#"
        [artifacts]
        scaler_path = "/var/lib/panganwatch/scaler.json"
        model_path = "/var/lib/panganwatch/knn.json"

        [session]
        color = false
        "#,
    )
    .unwrap();
    assert_eq!(cfg.scaler_path, PathBuf::from("/var/lib/panganwatch/scaler.json"));
    assert_eq!(cfg.model_path, PathBuf::from("/var/lib/panganwatch/knn.json"));
    assert!(!cfg.color);
}

#[test]
fn empty_file_values_do_not_clobber_defaults() {
    let mut cfg = DashboardConfig::default();
    cfg.apply_file_toml(
        r#"
        [artifacts]
        scaler_path = "  "
        "#,
    )
    .unwrap();
    assert_eq!(cfg.scaler_path, PathBuf::from("scaler_final.json"));
}

#[test]
fn partial_sections_are_accepted() {
    let mut cfg = DashboardConfig::default();
    cfg.apply_file_toml("[session]\n").unwrap();
    assert!(cfg.color);
    cfg.apply_file_toml("").unwrap();
}

#[test]
fn malformed_toml_is_rejected() {
    let mut cfg = DashboardConfig::default();
    assert!(cfg.apply_file_toml("[artifacts\nscaler_path = 3").is_err());
}

#[test]
fn non_empty_trims_whitespace_only_values() {
    assert_eq!(non_empty(Some("  ".to_string())), None);
    assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    assert_eq!(non_empty(None), None);
}
