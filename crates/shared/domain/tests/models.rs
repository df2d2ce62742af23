use serde_json::json;
use vgen_domain::adapter::{AdapterDescriptor, AdapterMapping, AdapterStatus};
use vgen_domain::region::{RegionCatalog, RegionRecord};
use vgen_domain::registry::RegistryEntry;

#[test]
fn region_record_fills_missing_fields() {
    let record: RegionRecord =
        serde_json::from_value(json!({ "status": "active", "flag": "🇩🇪" })).unwrap();
    assert_eq!(record.language, "en");
    assert_eq!(record.currency_symbol, "$");
    assert_eq!(record.currency_iso, "USD");
    assert!(record.is_active());
}

#[test]
fn catalog_iterates_in_code_order() {
    let catalog: RegionCatalog = serde_json::from_value(json!({
        "jp": { "language": "ja", "currency_symbol": "¥", "currency_iso": "JPY" },
        "ae": { "language": "ar" },
        "us": {}
    }))
    .unwrap();

    assert_eq!(catalog.codes().collect::<Vec<_>>(), ["ae", "jp", "us"]);
    assert_eq!(catalog.get("jp").map(|r| r.currency_iso.as_str()), Some("JPY"));
    assert!(!catalog.get("ae").unwrap().is_active());
}

#[test]
fn empty_mapping_serializes_as_empty_object() {
    let descriptor = AdapterDescriptor {
        adapter_name: "Credit Bureau (FR)".to_owned(),
        region: "FR".to_owned(),
        status: AdapterStatus::Locked,
        schema_version: "1.0".to_owned(),
        endpoint: String::new(),
        api_key_env_var: String::new(),
        mapping: AdapterMapping::default(),
        compliance_note: "pending".to_owned(),
    };

    let value = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(value["mapping"], json!({}));
    assert_eq!(value["status"], json!("locked"));

    let back: AdapterDescriptor = serde_json::from_value(value).unwrap();
    assert!(back.mapping.is_empty());
}

#[test]
fn registry_entry_active_flag() {
    let entry = RegistryEntry {
        region: "DE".to_owned(),
        bureau: "SCHUFA".to_owned(),
        status: "active".to_owned(),
        endpoint_placeholder: String::new(),
    };
    assert!(entry.is_active());
}
