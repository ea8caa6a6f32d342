use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use scorexpress_export::filename::ExportFormat;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.scorexpress.app";

/// Log output style of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// `EnvFilter` directives used when `RUST_LOG` is unset. Added in v1.
    pub log_filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Format recaps are exported to. Added in v1.
    pub export_format: ExportFormat,
    /// Overrides the default favorites file next to the config.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub favorites_path: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_filter: "info".to_string(),
            log_format: LogFormat::default(),
            export_format: ExportFormat::default(),
            favorites_path: None,
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Where favorites are stored: the override if set, else
    /// `favorites.json` in the config directory.
    pub fn resolved_favorites_path(&self) -> eyre::Result<PathBuf> {
        match &self.favorites_path {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("favorites.json")),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| has_config_at(&p)).unwrap_or(false)
}

pub fn has_config_at(path: &Path) -> bool {
    path.exists()
}

pub fn load_config() -> eyre::Result<AppConfig> {
    load_config_at(&config_path()?)
}

pub fn load_config_at(path: &Path) -> eyre::Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AppConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update ScoreXpress."
        ));
    }

    // v0 → v1: add export_format and log_filter
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("export_format")
            .or_insert(serde_json::Value::String("markdown".to_string()));
        obj.entry("log_filter")
            .or_insert(serde_json::Value::String("info".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added export_format, log_filter)");
    }

    Ok(json)
}

pub fn save_config(config: &AppConfig) -> eyre::Result<()> {
    save_config_at(&config_path()?, config)
}

pub fn save_config_at(path: &Path, config: &AppConfig) -> eyre::Result<()> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    write_atomic(path, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<()> {
    delete_config_at(&config_path()?)
}

pub fn delete_config_at(path: &Path) -> eyre::Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

/// Write to a sibling temp file then rename over `path`. The file is
/// readable by the owner only on Unix.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> eyre::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }

    let mut tmp_name = path
        .file_name()
        .ok_or_else(|| eyre::eyre!("{} has no file name", path.display()))?
        .to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
