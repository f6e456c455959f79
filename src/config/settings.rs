// src/config/settings.rs
//! On-disk settings (`disaster_dash.json`).
//!
//! Every field is optional in the file. Example:
//! ```json
//! { "data_dir": "data", "name_remap": { "Others": "Minnesota" } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use super::consts::{DEFAULT_DATA_DIR, LOG_FILE};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,
    /// Merged over the built-in remap table; entries here win.
    pub name_remap: BTreeMap<String, String>,
    /// GUI log file. `null` disables file logging.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            name_remap: BTreeMap::new(),
            log_file: Some(PathBuf::from(LOG_FILE)),
        }
    }
}

impl Settings {
    /// Missing file → defaults. Unreadable or malformed file → error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logd!("Settings: {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };

        let settings: Settings = serde_json::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        logf!(
            "Settings: Loaded {} (data_dir={}, remap entries={})",
            path.display(),
            settings.data_dir.display(),
            settings.name_remap.len()
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, text: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("disaster_dash_settings_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        fs::write(&p, text).unwrap();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let p = std::env::temp_dir().join("disaster_dash_definitely_missing.json");
        assert_eq!(Settings::load(&p).unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let p = temp_file("partial.json", r#"{ "name_remap": { "Others": "Minnesota" } }"#);
        let s = Settings::load(&p).unwrap();
        assert_eq!(s.data_dir, PathBuf::from("."));
        assert_eq!(s.name_remap.get("Others").map(String::as_str), Some("Minnesota"));
        assert!(s.log_file.is_some());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let p = temp_file("bad.json", "{ data_dir: ");
        assert!(matches!(Settings::load(&p), Err(ConfigError::Parse { .. })));
    }
}
