use std::{fs, path::Path};

use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_SETTINGS_FILE: &str = "directory.toml";
/// Records per page served by the remote collection.
pub const DEFAULT_REMOTE_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub remote_page_size: u32,
    /// Show a failure screen instead of staying on the loading screen when
    /// the initial load fails.
    pub surface_load_errors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            remote_page_size: DEFAULT_REMOTE_PAGE_SIZE,
            surface_load_errors: false,
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), |name| {
        std::env::var(name).ok()
    })
}

/// Defaults, then the optional settings file, then environment overrides.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, env);

    settings
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let table = match raw.parse::<toml::Table>() {
        Ok(table) => table,
        Err(err) => {
            warn!("ignoring unreadable settings file: {err}");
            return;
        }
    };

    if let Some(v) = table.get("api_base_url").and_then(toml::Value::as_str) {
        settings.api_base_url = v.to_string();
    }
    if let Some(v) = table.get("remote_page_size") {
        let parsed = match v {
            toml::Value::Integer(n) => u32::try_from(*n).ok(),
            toml::Value::String(s) => s.parse().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n > 0 => settings.remote_page_size = n,
            _ => warn!("ignoring invalid remote_page_size in settings file"),
        }
    }
    if let Some(v) = table.get("surface_load_errors").and_then(toml::Value::as_bool) {
        settings.surface_load_errors = v;
    }
}

pub fn apply_env_overrides(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("DIRECTORY_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = env("APP__PAGE_SIZE") {
        match v.parse::<u32>() {
            Ok(n) if n > 0 => settings.remote_page_size = n,
            _ => warn!(value = %v, "ignoring invalid APP__PAGE_SIZE"),
        }
    }

    if let Some(v) = env("APP__SURFACE_LOAD_ERRORS") {
        settings.surface_load_errors = matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        );
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
