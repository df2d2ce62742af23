use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;
use vgen_kernel::clock::FixedClock;
use vgen_kernel::domain::config::WorkspaceConfig;
use vgen_kernel::domain::simulation::{CommercialLogEntry, CreativeAsset, Crypmercial};
use vgen_simulation::{
    SimulationError, simulate_asset_sync, simulate_commercials, simulate_intelligence_sync,
    simulate_vault_sync,
};

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(9, 30, 0).unwrap())
}

fn workspace() -> (TempDir, WorkspaceConfig) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = WorkspaceConfig::rooted(dir.path());
    (dir, cfg)
}

#[test]
fn intelligence_sync_routes_webhooks_and_channels() {
    let mut out = Vec::<u8>::new();
    simulate_intelligence_sync(&mut out, &clock()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Kimi received creative update for crypdna-translations with tag v3.0-localized_aesthetic."));
    assert!(text.contains("Manus received backend update for crypdna-vault-genesis with tag v3.2-infra_update."));
    assert_eq!(text.matches("Data Channel:").count(), 5);
    assert!(text.contains("build artifacts data transferred at 2026-10-17T09:30:00.000000"));
}

#[test]
fn asset_sync_writes_one_dummy_per_directory() {
    let (dir, cfg) = workspace();
    let mut out = Vec::<u8>::new();

    let synced = simulate_asset_sync(&cfg, &clock(), &mut out).unwrap();

    assert_eq!(synced.len(), 4);
    for sub in ["assets/brand", "media/crypdawgs_visuals", "scripts/cryp_commercials", "audio/crypsoundbank"] {
        let file = dir.path().join(sub).join("dummy_asset_20261017093000.txt");
        assert_eq!(fs::read_to_string(file).unwrap(), "Simulated asset content.");
    }
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Kimi Connection Status: Successful"));
}

#[test]
fn commercials_are_generated_per_region_and_theme() {
    let (dir, cfg) = workspace();
    fs::write(
        cfg.paths.catalog_path(),
        r#"{ "jp": { "language": "ja", "currency_symbol": "¥", "currency_iso": "JPY" }, "uk": {} }"#,
    )
    .unwrap();

    let logs = simulate_commercials(&cfg, &clock(), &mut Vec::<u8>::new()).unwrap();
    assert_eq!(logs.len(), 6);

    let painite = cfg.paths.vault_path("jp").join("assets/crypmercials/painite_crypmercial.json");
    let ad: Crypmercial = serde_json::from_str(&fs::read_to_string(&painite).unwrap()).unwrap();
    assert_eq!(ad.region, "JP");
    assert_eq!(ad.scheduled_post_date, "2026-10-24");
    assert!(cfg.paths.vault_path("uk").join("assets/crypmercials/vicuña_crypmercial.json").is_file());

    let logged: Vec<CommercialLogEntry> =
        serde_json::from_str(&fs::read_to_string(cfg.paths.commercial_logs_path()).unwrap()).unwrap();
    assert_eq!(logged, logs);
    assert_eq!(logged[0].region.as_deref(), Some("JP"));
    assert_eq!(logged[0].status.as_deref(), Some("Generated and Localized"));
    assert_eq!(logged[0].output_file, Some(painite.to_string_lossy().into_owned()));
    assert_eq!(logged[5].region.as_deref(), Some("UK"));

    let brand = dir.path().join("assets/brand/dummy_asset_20261017093000.txt");
    assert_eq!(fs::read_to_string(brand).unwrap(), "Simulated brand asset for UK");
}

#[test]
fn commercials_without_catalog_write_nothing() {
    let (_dir, cfg) = workspace();

    let err = simulate_commercials(&cfg, &clock(), &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, SimulationError::Catalog { .. }));
    assert!(!cfg.paths.commercial_logs_path().exists());
    assert!(!cfg.paths.vaults_path().exists());
}

#[test]
fn vault_sync_writes_assets_and_summary_lines() {
    let (_dir, cfg) = workspace();
    for code in ["uk", "jp"] {
        fs::create_dir_all(cfg.paths.vault_path(code)).unwrap();
    }
    fs::write(cfg.paths.deployment_summary_path(), "# Deployment Summary\n").unwrap();

    let mut out = Vec::<u8>::new();
    let written = simulate_vault_sync(&cfg, &clock(), &mut out).unwrap();
    assert_eq!(written.len(), 4);

    let asset_path = cfg.paths.vault_path("jp").join("assets/kimi_creative_creative_update_jp.json");
    let asset: CreativeAsset = serde_json::from_str(&fs::read_to_string(asset_path).unwrap()).unwrap();
    assert_eq!(asset.asset_name, "Creative Asset for JP");
    assert_eq!(asset.source_tag, "creative_update");

    let summary = fs::read_to_string(cfg.paths.deployment_summary_path()).unwrap();
    let lines: Vec<_> = summary.lines().skip(1).collect();
    assert_eq!(
        lines,
        [
            "- Sync Complete: JP - creative_update - 2026-10-17 09:30:00",
            "- Sync Complete: UK - creative_update - 2026-10-17 09:30:00",
            "- Sync Complete: JP - localized_aesthetic - 2026-10-17 09:30:00",
            "- Sync Complete: UK - localized_aesthetic - 2026-10-17 09:30:00",
        ]
    );
    assert!(String::from_utf8(out).unwrap().contains("Found 2 Vault regions: jp, uk"));
}

#[test]
fn vault_sync_without_vaults_writes_nothing() {
    let (_dir, cfg) = workspace();
    let mut out = Vec::<u8>::new();

    assert!(simulate_vault_sync(&cfg, &clock(), &mut out).unwrap().is_empty());
    assert!(String::from_utf8(out).unwrap().contains("No Vault regions found"));
    assert!(!cfg.paths.deployment_summary_path().exists());
}
