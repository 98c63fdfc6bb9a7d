//! Session preferences, persisted across launches.
//!
//! One string value per key: a file per key under the platform data dir on
//! native, an in-memory map on wasm. The only preference today is the
//! dark-mode flag. Writes are best-effort; a failed write is logged and
//! the session carries on with its in-memory value.

#[cfg(target_arch = "wasm32")]
use once_cell::sync::Lazy;
#[cfg(target_arch = "wasm32")]
use std::collections::HashMap;
#[cfg(target_arch = "wasm32")]
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

const DARK_MODE_KEY: &str = "dark_mode";

/// In-memory preference map for wasm builds
#[cfg(target_arch = "wasm32")]
static PREFERENCES: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[cfg(not(target_arch = "wasm32"))]
fn preferences_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("mannmitra").join("prefs");
    }

    PathBuf::from("cache").join("prefs")
}

/// Sanitize a preference key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preference_get(key: &str) -> Option<String> {
    let file_path = preferences_dir().join(sanitize_key(key));
    fs::read_to_string(file_path).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn preference_get(key: &str) -> Option<String> {
    let prefs = PREFERENCES.lock().ok()?;
    prefs.get(key).cloned()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preference_set(key: &str, value: &str) -> anyhow::Result<()> {
    let dir = preferences_dir();
    fs::create_dir_all(&dir).context("failed to create preferences directory")?;
    let file_path = dir.join(sanitize_key(key));
    fs::write(file_path, value).context("failed to write preference")
}

#[cfg(target_arch = "wasm32")]
pub fn preference_set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut prefs = PREFERENCES
        .lock()
        .map_err(|_| anyhow::anyhow!("preference map poisoned"))?;
    prefs.insert(key.to_string(), value.to_string());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preference_delete(key: &str) -> anyhow::Result<()> {
    let file_path = preferences_dir().join(sanitize_key(key));
    if file_path.exists() {
        fs::remove_file(file_path).context("failed to delete preference")?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn preference_delete(key: &str) -> anyhow::Result<()> {
    let mut prefs = PREFERENCES
        .lock()
        .map_err(|_| anyhow::anyhow!("preference map poisoned"))?;
    prefs.remove(key);
    Ok(())
}

/// Read the dark-mode flag. Absent or malformed values mean light mode.
pub fn load_dark_mode() -> bool {
    preference_get(DARK_MODE_KEY)
        .map(|value| value.trim() == "true")
        .unwrap_or(false)
}

/// Write the dark-mode flag back, stringified. Best-effort.
pub fn store_dark_mode(enabled: bool) {
    if let Err(err) = preference_set(DARK_MODE_KEY, &enabled.to_string()) {
        tracing::warn!("could not persist dark-mode preference: {err:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("dark_mode"), "dark_mode");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }
}
