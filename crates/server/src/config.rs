use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use site::SceneKind;

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    /// `None` runs the site against the in-memory demo store.
    pub database_url: Option<String>,
    pub assets_dir: PathBuf,
    pub scene: SceneKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            database_url: None,
            assets_dir: PathBuf::from("assets"),
            scene: SceneKind::Atmosphere,
        }
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the optional settings file, then the environment.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        let file_cfg = toml::from_str::<HashMap<String, String>>(&raw)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.server_bind = v.clone();
        }
        if let Some(v) = file_cfg.get("database_url") {
            settings.database_url = Some(v.clone());
        }
        if let Some(v) = file_cfg.get("assets_dir") {
            settings.assets_dir = PathBuf::from(v);
        }
        if let Some(v) = file_cfg.get("scene") {
            settings.scene = parse_scene(v)?;
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("DATABASE_URL") {
        settings.database_url = Some(v);
    }
    if let Some(v) = env("APP__DATABASE_URL") {
        settings.database_url = Some(v);
    }

    if let Some(v) = env("ASSETS_DIR") {
        settings.assets_dir = PathBuf::from(v);
    }
    if let Some(v) = env("APP__SCENE") {
        settings.scene = parse_scene(&v)?;
    }

    settings.database_url = settings
        .database_url
        .as_deref()
        .and_then(normalize_database_url);

    Ok(settings)
}

fn parse_scene(raw: &str) -> anyhow::Result<SceneKind> {
    match raw.trim() {
        "atmosphere" => Ok(SceneKind::Atmosphere),
        "space" => Ok(SceneKind::Space),
        other => anyhow::bail!("unknown scene '{other}', expected 'atmosphere' or 'space'"),
    }
}

/// Brings a configured database location into a form sqlx accepts. A blank
/// value means no database at all.
pub fn normalize_database_url(raw_database_url: &str) -> Option<String> {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return None;
    }

    if raw_database_url.starts_with("sqlite::memory:") {
        return Some(raw_database_url.to_string());
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite://") {
        return Some(sqlite_url_for_path(path));
    }

    if raw_database_url.contains("://") {
        return Some(raw_database_url.to_string());
    }

    let path = raw_database_url
        .strip_prefix("sqlite:")
        .unwrap_or(raw_database_url);
    Some(sqlite_url_for_path(path))
}

fn sqlite_url_for_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    if has_drive_letter(&path) {
        format!("sqlite:{path}")
    } else {
        format!("sqlite://{path}")
    }
}

fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
