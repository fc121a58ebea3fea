use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "DWI_SCREEN_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Added in v1; older configs are migrated to `pretty`.
    pub log_format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Pretty-print JSON written to stdout.
    #[serde(default)]
    pub pretty_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_format: LogFormat::Pretty,
            log_filter: default_log_filter(),
            pretty_output: false,
        }
    }
}

pub fn config_path() -> eyre::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("dwi-screen").join("config.json"))
}

/// A loaded config, plus the on-disk version it was migrated from (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: ScreenConfig,
    pub migrated_from: Option<u32>,
}

/// Load the config, falling back to defaults when no file exists.
pub fn load_config() -> eyre::Result<LoadedConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: ScreenConfig::default(),
            migrated_from: None,
        });
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v)
            .map_err(|_| eyre::eyre!("config_version {v} is out of range"))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: ScreenConfig = serde_json::from_value(migrated)?;
    Ok(LoadedConfig {
        config,
        migrated_from: (on_disk_version < CURRENT_VERSION).then_some(on_disk_version),
    })
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value. Logging is left
/// to the caller, which may run before a subscriber is installed.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: add log_format
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("log_format")
            .or_insert(serde_json::Value::String("pretty".to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(config: &ScreenConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &ScreenConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
