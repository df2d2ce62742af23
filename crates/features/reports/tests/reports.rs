use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;
use vgen_kernel::clock::FixedClock;
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_reports::{
    GLOBAL_REGIONS, ReportsError, StatusEdition, generate_credit_report,
    generate_integration_report, generate_status_report,
};

const CATALOG: &str = r#"{
    "us": { "status": "active" },
    "jp": { "language": "ja", "currency_symbol": "¥", "currency_iso": "JPY" },
    "xx": { "status": "active" }
}"#;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(9, 30, 0).unwrap())
}

fn workspace() -> (TempDir, WorkspaceConfig) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = WorkspaceConfig::rooted(dir.path());
    (dir, cfg)
}

fn put(path: &std::path::Path, body: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

#[test]
fn credit_report_rows_cover_found_missing_and_broken_descriptors() {
    let (_dir, cfg) = workspace();
    put(&cfg.paths.catalog_path(), CATALOG);
    let adapters = cfg.paths.adapters_path();
    put(
        &adapters.join("us_adapter.json"),
        r#"{ "adapter_name": "Dun & Bradstreet (D&B)", "status": "live", "compliance_note": "FCRA." }"#,
    );
    put(&adapters.join("xx_adapter.json"), "{ nope");

    let path = generate_credit_report(&cfg, &clock()).unwrap();
    let report = fs::read_to_string(path).unwrap();

    assert!(report.starts_with("# CrypDNA Vault Credit Report\n"));
    assert!(report.contains("| JP     | Adapter file missing      | Missing  | Adapter file not found in directory."));
    assert!(report.contains("| US     | Dun & Bradstreet (D&B)    | live     | FCRA."));
    assert!(report.contains("| XX     | Error reading adapter file | Error    | Could not decode adapter JSON."));
    assert!(report.contains("- **Active Reporting Node:** `usa.crypdawgs.com`"));
    assert!(report.ends_with("**Report Generated:** 2026-10-17 09:30:00\n"));

    let jp = report.find("| JP ").unwrap();
    let us = report.find("| US ").unwrap();
    let xx = report.find("| XX ").unwrap();
    assert!(jp < us && us < xx);
}

#[test]
fn credit_report_without_catalog_still_completes() {
    let (_dir, cfg) = workspace();

    let report = fs::read_to_string(generate_credit_report(&cfg, &clock()).unwrap()).unwrap();

    assert!(report.contains("No regions available"));
    for heading in ["## 1.", "## 2.", "## 3.", "## Conclusion"] {
        assert!(report.contains(heading), "missing {heading}");
    }
}

#[test]
fn integration_report_lists_logged_commercials() {
    let (_dir, cfg) = workspace();
    let output = cfg.paths.vault_path("jp").join("assets/crypmercials/painite_crypmercial.json");
    put(
        &cfg.paths.commercial_logs_path(),
        &serde_json::json!([
            {
                "timestamp": "2026-10-17T09:30:00",
                "region": "JP",
                "theme": "Painite",
                "status": "Generated and Localized",
                "output_file": output.to_string_lossy(),
                "scheduled_post": "2026-10-24"
            },
            { "region": "UK" }
        ])
        .to_string(),
    );

    let report = fs::read_to_string(generate_integration_report(&cfg, &clock()).unwrap()).unwrap();

    assert!(report.contains("- **Last Verified:** 2026-10-17 09:30:00"));
    assert!(report.contains("- `/assets/brand/`"));
    assert!(report.contains("themes based on Painite, Vicuña, and Meteorite"));
    assert!(report.contains("| JP     | Painite     | Generated and Localized | 2026-10-24           | vaults/jp/assets/crypmercials/painite_crypmercial.json |"));
    assert!(report.contains("| UK     | N/A         | N/A                    | N/A                  | N/A"));
}

#[test]
fn integration_report_explains_missing_or_broken_logs() {
    let (_dir, cfg) = workspace();
    let missing = fs::read_to_string(generate_integration_report(&cfg, &clock()).unwrap()).unwrap();
    assert!(missing.contains("*No commercial generation logs found."));
    assert!(missing.contains("*No commercial generation logs available.*"));

    put(&cfg.paths.commercial_logs_path(), "{ broken");
    let broken = fs::read_to_string(generate_integration_report(&cfg, &clock()).unwrap()).unwrap();
    assert!(broken.contains("*Error reading commercial generation logs. File might be corrupted.*"));

    put(&cfg.paths.commercial_logs_path(), "[]");
    let empty = fs::read_to_string(generate_integration_report(&cfg, &clock()).unwrap()).unwrap();
    assert!(!empty.contains("logs found"));
    assert!(empty.contains("*No commercial generation logs available.*"));
}

#[test]
fn status_report_v3_marks_dormant_vaults() {
    let (_dir, cfg) = workspace();
    put(&cfg.paths.catalog_path(), CATALOG);

    let report =
        fs::read_to_string(generate_status_report(&cfg, &clock(), StatusEdition::V3).unwrap()).unwrap();

    assert!(report.contains("| JP          | jp.crypdawgs.com          | Live and Accessible (Simulated) | Dormant Vault: Adapter in standby"));
    assert!(report.contains("| US          | us.crypdawgs.com "));
    assert!(report.contains("tag `v3.1-vault_activation`"));
    assert!(!report.contains("Maintenance"));
    assert_eq!(report.matches("Dormant Vault").count(), 1);
}

#[test]
fn status_report_v4_covers_catalog_and_global_regions() {
    let (_dir, cfg) = workspace();
    put(&cfg.paths.catalog_path(), CATALOG);

    let report =
        fs::read_to_string(generate_status_report(&cfg, &clock(), StatusEdition::V4).unwrap()).unwrap();

    let rows: Vec<_> = report.lines().filter(|l| l.contains("200 OK (Simulated)")).collect();
    assert_eq!(rows.len(), GLOBAL_REGIONS.len() + 1);
    assert!(rows.iter().any(|r| r.starts_with("| XX ")));
    assert!(rows.iter().any(|r| r.contains("usa.crypdawgs.com")));
    assert!(rows.iter().any(|r| r.contains("dubai.crypdawgs.com")));
    assert!(rows[0].starts_with("| AE "));
    assert!(report.contains("checkpoint is set for **2026-11-16**"));
    assert!(report.contains("tag `v4.0-global_activation`"));
}

#[test]
fn status_report_requires_catalog() {
    let (_dir, cfg) = workspace();

    let err = generate_status_report(&cfg, &clock(), StatusEdition::V4).unwrap_err();
    assert!(matches!(err, ReportsError::Catalog { .. }));
    assert!(!cfg.paths.report_path("Vault_Status_Report.md").exists());
}
