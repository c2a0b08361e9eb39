//! Usage: Persisted application settings (schema + read/write helpers).

use crate::app_paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SCHEMA_VERSION: u32 = 2;
const SCHEMA_VERSION_ADD_WINDOW_SIZE: u32 = 2;
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const MIN_WINDOW_WIDTH: u32 = 400;
const MIN_WINDOW_HEIGHT: u32 = 300;
const MAX_WINDOW_WIDTH: u32 = 7680;
const MAX_WINDOW_HEIGHT: u32 = 4320;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub schema_version: u32,
    pub tray_enabled: bool,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tray_enabled: true,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

fn sanitize_window_size(settings: &mut AppSettings) -> bool {
    let mut changed = false;

    if settings.window_width < MIN_WINDOW_WIDTH {
        settings.window_width = MIN_WINDOW_WIDTH;
        changed = true;
    }
    if settings.window_width > MAX_WINDOW_WIDTH {
        settings.window_width = MAX_WINDOW_WIDTH;
        changed = true;
    }
    if settings.window_height < MIN_WINDOW_HEIGHT {
        settings.window_height = MIN_WINDOW_HEIGHT;
        changed = true;
    }
    if settings.window_height > MAX_WINDOW_HEIGHT {
        settings.window_height = MAX_WINDOW_HEIGHT;
        changed = true;
    }

    changed
}

fn migrate_add_window_size(settings: &mut AppSettings, schema_version_present: bool) -> bool {
    // v2: Add main window size (defaults 800x600).
    if schema_version_present && settings.schema_version >= SCHEMA_VERSION_ADD_WINDOW_SIZE {
        return false;
    }

    let mut changed = false;

    // If schema_version is missing, force a write to persist schema_version so we don't keep "migrating"
    // on every startup.
    if !schema_version_present {
        changed = true;
    }

    if settings.schema_version != SCHEMA_VERSION_ADD_WINDOW_SIZE {
        settings.schema_version = SCHEMA_VERSION_ADD_WINDOW_SIZE;
        changed = true;
    }

    changed
}

fn validate(settings: &AppSettings) -> Result<(), String> {
    if settings.window_width < MIN_WINDOW_WIDTH || settings.window_width > MAX_WINDOW_WIDTH {
        return Err(format!(
            "window_width must be between {MIN_WINDOW_WIDTH} and {MAX_WINDOW_WIDTH}"
        ));
    }
    if settings.window_height < MIN_WINDOW_HEIGHT || settings.window_height > MAX_WINDOW_HEIGHT {
        return Err(format!(
            "window_height must be between {MIN_WINDOW_HEIGHT} and {MAX_WINDOW_HEIGHT}"
        ));
    }
    Ok(())
}

fn settings_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    Ok(app_paths::app_data_dir(app)?.join("settings.json"))
}

fn parse_settings_json(content: &str) -> Result<(AppSettings, bool), String> {
    let raw: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("failed to parse settings.json: {e}"))?;
    let schema_version_present = raw.get("schema_version").is_some();
    let settings: AppSettings =
        serde_json::from_value(raw).map_err(|e| format!("failed to parse settings.json: {e}"))?;
    Ok((settings, schema_version_present))
}

pub fn read(app: &tauri::AppHandle) -> Result<AppSettings, String> {
    let path = settings_path(app)?;

    if !path.exists() {
        let settings = AppSettings::default();
        // Best-effort: create default settings.json on first read to make the config discoverable/editable.
        let _ = write(app, &settings);
        return Ok(settings);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| format!("failed to read settings: {e}"))?;
    let (mut settings, schema_version_present) = parse_settings_json(&content)?;

    let mut repaired = false;
    repaired |= migrate_add_window_size(&mut settings, schema_version_present);
    repaired |= sanitize_window_size(&mut settings);
    if repaired {
        // Best-effort: persist repaired values while keeping read semantics.
        let _ = write(app, &settings);
    }

    Ok(settings)
}

/// Fail-soft read for startup paths: a broken settings file must not keep the
/// app from coming up.
pub fn read_or_default(app: &tauri::AppHandle) -> AppSettings {
    match read(app) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("配置读取失败，使用默认值: {}", err);
            AppSettings::default()
        }
    }
}

pub fn write(app: &tauri::AppHandle, settings: &AppSettings) -> Result<AppSettings, String> {
    validate(settings)?;

    let path = settings_path(app)?;
    let tmp_path = path.with_file_name("settings.json.tmp");
    let backup_path = path.with_file_name("settings.json.bak");

    let content = serde_json::to_vec_pretty(settings)
        .map_err(|e| format!("failed to serialize settings: {e}"))?;

    std::fs::write(&tmp_path, content)
        .map_err(|e| format!("failed to write temp settings file: {e}"))?;

    if backup_path.exists() {
        let _ = std::fs::remove_file(&backup_path);
    }

    if path.exists() {
        std::fs::rename(&path, &backup_path)
            .map_err(|e| format!("failed to create settings backup: {e}"))?;
    }

    if let Err(e) = std::fs::rename(&tmp_path, &path) {
        let _ = std::fs::rename(&backup_path, &path);
        return Err(format!("failed to finalize settings: {e}"));
    }

    if backup_path.exists() {
        let _ = std::fs::remove_file(&backup_path);
    }

    Ok(settings.clone())
}

#[cfg(test)]
mod tests;
