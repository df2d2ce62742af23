use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use vgen::domain::config::WorkspaceConfig;
use vgen::kernel::clock::FixedClock;
use vgen::{PipelineError, run_pipeline};

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(9, 30, 0).unwrap())
}

#[test]
fn pipeline_generates_links_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = WorkspaceConfig::rooted(dir.path());
    fs::write(cfg.paths.catalog_path(), r#"{ "us": {}, "jp": {}, "uk": {} }"#).unwrap();
    let jp_config = cfg.paths.vault_config_path("jp");
    fs::create_dir_all(jp_config.parent().unwrap()).unwrap();
    fs::write(&jp_config, r#"{ "theme": "sakura" }"#).unwrap();

    let summary = run_pipeline(&cfg, &clock()).unwrap();

    assert_eq!(summary.descriptors, 3);
    assert_eq!(summary.registry_entries, 3);
    assert_eq!(summary.linked.updated, ["jp"]);

    let config: Value = serde_json::from_str(&fs::read_to_string(jp_config).unwrap()).unwrap();
    assert_eq!(config["theme"], "sakura");
    assert_eq!(config["credit_adapter_registry_path"], "../../credit_adapters/adapter_registry.json");

    let report = fs::read_to_string(summary.credit_report).unwrap();
    assert!(report.contains("| UK     | Credit Bureau (UK)        | locked   |"));
}

#[test]
fn pipeline_stops_at_missing_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = WorkspaceConfig::rooted(dir.path());

    let err = run_pipeline(&cfg, &clock()).unwrap_err();
    assert!(matches!(err, PipelineError::Adapters { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Adapter step failed (generate)"));
    assert!(!cfg.paths.registry_path().exists());
}
