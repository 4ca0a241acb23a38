//! Layered configuration.
//!
//! Settings are resolved in order, later sources winning:
//! - Built-in defaults
//! - `settings.toml` (explicit path, or `<config_dir>/tally/settings.toml`)
//! - Environment variables
//!
//! # Environment Variables
//!
//! Environment variables are prefixed with `TALLY_` and use double
//! underscores to separate nested levels:
//! - `TALLY_HISTORY_KEY=scratch` sets `history_key`
//! - `TALLY_ENCODING=binary` sets `encoding`
//! - `TALLY_LOGGING__DEFAULT=debug` sets `logging.default`

use crate::storage::FileStore;
use crate::store::{HistoryEncoding, DEFAULT_HISTORY_KEY};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TALLY_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the file-backed key-value store
    #[serde(default = "default_data_dir", deserialize_with = "scalar::path")]
    pub data_dir: PathBuf,

    /// Storage key of the history entry
    #[serde(default = "default_history_key", deserialize_with = "scalar::string")]
    pub history_key: String,

    /// Wire format of the history entry
    #[serde(default)]
    pub encoding: HistoryEncoding,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log filter configuration.
///
/// ```toml
/// [logging]
/// default = "warn"
///
/// [logging.modules]
/// "tally::store" = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    #[serde(default = "default_log_level", deserialize_with = "scalar::string")]
    pub default: String,

    /// Per-target level overrides
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

/// Lenient text fields.
///
/// The environment provider parses values, so `TALLY_HISTORY_KEY=2024`
/// arrives as an integer. Text settings take any scalar back as text.
mod scalar {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;
    use std::path::PathBuf;

    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(ScalarText)
    }

    pub fn path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PathBuf, D::Error> {
        string(deserializer).map(PathBuf::from)
    }
}

fn default_data_dir() -> PathBuf {
    FileStore::default_root().unwrap_or_else(|| PathBuf::from(".tally"))
}

fn default_history_key() -> String {
    DEFAULT_HISTORY_KEY.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            history_key: default_history_key(),
            encoding: HistoryEncoding::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, using the default config path.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        match Self::default_config_path() {
            Some(path) => Self::load_from(path),
            None => Self::figment(None).extract().map_err(Box::new),
        }
    }

    /// Load configuration with `path` as the TOML layer.
    ///
    /// A missing file is not an error; its layer is simply empty.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(Some(path.as_ref())).extract().map_err(Box::new)
    }

    /// `<config_dir>/tally/settings.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tally").join("settings.toml"))
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
