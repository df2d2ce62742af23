use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;
use vgen_kernel::fs::{FsError, append_line, list_dirs, read_json, read_text, write_json, write_text};

#[test]
fn write_json_creates_parents_and_pretty_prints() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credit_adapters").join("jp_adapter.json");

    write_json(&path, &json!({ "region": "JP", "mapping": {} })).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "{\n  \"region\": \"JP\",\n  \"mapping\": {}\n}");
    let back: Value = read_json(&path).unwrap();
    assert_eq!(back["region"], "JP");
}

#[test]
fn write_replaces_existing_content_without_leftovers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.md");

    write_text(&path, "first draft, much longer than the second").unwrap();
    write_text(&path, "final").unwrap();

    assert_eq!(read_text(&path).unwrap(), "final");
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["report.md".to_owned()]);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = read_json::<Value>(dir.path().join("regions_data.json")).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("regions_data.json"));
}

#[test]
fn malformed_json_is_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regions_data.json");
    fs::write(&path, "{ \"us\": ").unwrap();

    let err = read_json::<Value>(&path).unwrap_err();
    assert!(err.is_decode());
    assert!(matches!(err, FsError::Decode { context: Some(_), .. }));
}

#[test]
fn append_line_accumulates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.md");
    fs::write(&path, "# Summary\n").unwrap();

    append_line(&path, "- Sync Complete: JP - creative_update - now").unwrap();
    append_line(&path, "- Sync Complete: JP - localized_aesthetic - now").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.ends_with("localized_aesthetic - now\n"));
}

#[test]
fn list_dirs_is_sorted_and_skips_files() {
    let dir = tempdir().unwrap();
    for name in ["uk", "ae", "jp"] {
        fs::create_dir(dir.path().join(name)).unwrap();
    }
    fs::write(dir.path().join("README.md"), "").unwrap();

    assert_eq!(list_dirs(dir.path()).unwrap(), ["ae", "jp", "uk"]);
    assert!(list_dirs(dir.path().join("absent")).unwrap_err().is_not_found());
}

#[test]
fn list_files_filters_by_suffix() {
    let dir = tempdir().unwrap();
    for name in ["us_adapter.json", "adapter_registry.json", "jp_adapter.json", "notes.txt"] {
        fs::write(dir.path().join(name), "{}").unwrap();
    }
    fs::create_dir(dir.path().join("old_adapter.json")).unwrap();

    let files = vgen_kernel::fs::list_files(dir.path(), "_adapter.json").unwrap();
    assert_eq!(files, ["jp_adapter.json", "us_adapter.json"]);
}

#[cfg(unix)]
#[test]
fn list_dirs_follows_symlinked_directories() {
    let dir = tempdir().unwrap();
    let shared = dir.path().join("shared_vault");
    let vaults = dir.path().join("vaults");
    fs::create_dir_all(&shared).unwrap();
    fs::create_dir_all(vaults.join("uk")).unwrap();
    std::os::unix::fs::symlink(&shared, vaults.join("jp")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), vaults.join("zz")).unwrap();

    assert_eq!(list_dirs(&vaults).unwrap(), ["jp", "uk"]);
}
