use scorexpress_app::config::{
    AppConfig, LogFormat, delete_config_at, has_config_at, load_config_at, save_config_at,
};
use scorexpress_export::filename::ExportFormat;

#[test]
fn save_then_load_keeps_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = AppConfig::new();
    config.log_format = LogFormat::Json;
    config.export_format = ExportFormat::Docx;
    config.favorites_path = Some(dir.path().join("favs.json"));

    assert!(!has_config_at(&path));
    save_config_at(&path, &config).unwrap();
    assert!(has_config_at(&path));

    let loaded = load_config_at(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config_at(&path, &AppConfig::new()).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["config.json"]);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config_at(&path, &AppConfig::new()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn save_stamps_the_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = AppConfig::new();
    config.config_version = 0;
    save_config_at(&path, &config).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["config_version"], 1);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "log_format": "json", "created_at": "2024-05-01T10:00:00Z" }"#,
    )
    .unwrap();

    let config = load_config_at(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.export_format, ExportFormat::Markdown);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.favorites_path, None);
}

#[test]
fn migration_keeps_existing_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "log_filter": "debug", "export_format": "docx", "created_at": "2024-05-01T10:00:00Z" }"#,
    )
    .unwrap();

    let config = load_config_at(&path).unwrap();
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.export_format, ExportFormat::Docx);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 7, "log_filter": "info", "export_format": "markdown", "created_at": "2024-05-01T10:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_at(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = load_config_at(&path).unwrap_err();
    assert!(err.to_string().contains("not a JSON object"));
}

#[test]
fn missing_config_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_config_at(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config_at(&path, &AppConfig::new()).unwrap();

    delete_config_at(&path).unwrap();
    assert!(!has_config_at(&path));
    delete_config_at(&path).unwrap();
}

#[test]
fn favorites_override_wins() {
    let mut config = AppConfig::new();
    config.favorites_path = Some("/tmp/elsewhere/favs.json".into());
    assert_eq!(
        config.resolved_favorites_path().unwrap(),
        std::path::PathBuf::from("/tmp/elsewhere/favs.json")
    );
}
