//! Load and save the view-preferences blob. A missing blob is normal
//! (first launch) and yields defaults; a malformed one surfaces as a
//! parse error the caller downgrades to defaults.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::state::prefs::UiPrefs;

/// File name of the preferences blob inside the state directory.
pub const PREFS_FILE_NAME: &str = "deals-ui.json";

/// Environment override for the state directory, mainly for tests and
/// portable setups.
pub const STATE_DIR_ENV: &str = "DEALSHEET_STATE_DIR";

#[derive(Debug)]
pub enum PrefsIoError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for PrefsIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsIoError::Io(e) => write!(f, "IO error: {e}"),
            PrefsIoError::Parse(e) => write!(f, "preferences parse error: {e}"),
        }
    }
}

impl std::error::Error for PrefsIoError {}

impl From<io::Error> for PrefsIoError {
    fn from(e: io::Error) -> Self {
        PrefsIoError::Io(e)
    }
}

impl From<serde_json::Error> for PrefsIoError {
    fn from(e: serde_json::Error) -> Self {
        PrefsIoError::Parse(e)
    }
}

/// Resolve where the blob lives: the `DEALSHEET_STATE_DIR` override if
/// set, otherwise the per-user config directory for this app. `None`
/// when the platform offers no home directory; the app then runs with
/// in-memory preferences only.
pub fn prefs_path() -> Option<PathBuf> {
    if let Ok(dir) = env::var(STATE_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join(PREFS_FILE_NAME));
        }
    }
    ProjectDirs::from("", "", "dealsheet").map(|dirs| dirs.config_dir().join(PREFS_FILE_NAME))
}

pub fn load_prefs() -> Result<UiPrefs, PrefsIoError> {
    match prefs_path() {
        Some(path) => load_prefs_from(&path),
        None => Ok(UiPrefs::default()),
    }
}

pub fn load_prefs_from(path: &Path) -> Result<UiPrefs, PrefsIoError> {
    if !path.exists() {
        return Ok(UiPrefs::default());
    }
    let content = fs::read_to_string(path)?;
    let prefs = serde_json::from_str(&content)?;
    Ok(prefs)
}

pub fn save_prefs(prefs: &UiPrefs) -> Result<(), PrefsIoError> {
    match prefs_path() {
        Some(path) => save_prefs_to(&path, prefs),
        None => Ok(()),
    }
}

pub fn save_prefs_to(path: &Path, prefs: &UiPrefs) -> Result<(), PrefsIoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(prefs)?;
    crate::io::atomic_write_string(path, &content)?;
    Ok(())
}
