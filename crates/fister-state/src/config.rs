//! Store configuration from defaults or environment variables.

use crate::domain::errors::ConfigError;
use crate::domain::records::RecordKind;
use std::env;
use std::path::PathBuf;

/// Default catalog slot key.
pub const DEFAULT_CATALOG_KEY: &str = "fisterSMS_db_v15_config";

/// Default user slot key.
pub const DEFAULT_USER_KEY: &str = "fisterSMS_user_v15_state";

/// Default pause between the login action and showing the application view.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;

/// Configuration for the state store.
///
/// Slot keys must stay stable for a deployment: changing one orphans every
/// record stored under the old key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slot key for the catalog record.
    pub catalog_key: String,

    /// Slot key for the user record.
    pub user_key: String,

    /// Backing file for `FileBackedSlotStorage` (`None` = in-memory only).
    pub storage_path: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Login-to-application pacing delay for the presentation layer.
    pub login_delay_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_key: DEFAULT_CATALOG_KEY.to_string(),
            user_key: DEFAULT_USER_KEY.to_string(),
            storage_path: None,
            log_level: "info".to_string(),
            json_logs: false,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FISTER_CATALOG_KEY`: Catalog slot key (default: fisterSMS_db_v15_config)
    /// - `FISTER_USER_KEY`: User slot key (default: fisterSMS_user_v15_state)
    /// - `FISTER_STORAGE_PATH`: Slot storage file (default: unset, in-memory)
    /// - `FISTER_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `FISTER_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `FISTER_LOGIN_DELAY_MS`: Login pacing delay (default: 1500)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            catalog_key: lookup("FISTER_CATALOG_KEY").unwrap_or(defaults.catalog_key),

            user_key: lookup("FISTER_USER_KEY").unwrap_or(defaults.user_key),

            storage_path: lookup("FISTER_STORAGE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            log_level: lookup("FISTER_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("FISTER_JSON_LOGS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.json_logs),

            login_delay_ms: lookup("FISTER_LOGIN_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.login_delay_ms),
        }
    }

    /// Check the slot keys are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_key.trim().is_empty() {
            return Err(ConfigError::EmptySlotKey {
                field: "catalog_key",
            });
        }
        if self.user_key.trim().is_empty() {
            return Err(ConfigError::EmptySlotKey { field: "user_key" });
        }
        if self.catalog_key == self.user_key {
            return Err(ConfigError::SharedSlotKey {
                key: self.catalog_key.clone(),
            });
        }
        Ok(())
    }

    /// Slot key for a record kind.
    pub fn slot_key(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Catalog => &self.catalog_key,
            RecordKind::User => &self.user_key,
        }
    }

    pub fn with_catalog_key(mut self, key: impl Into<String>) -> Self {
        self.catalog_key = key.into();
        self
    }

    pub fn with_user_key(mut self, key: impl Into<String>) -> Self {
        self.user_key = key.into();
        self
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    pub fn with_login_delay_ms(mut self, delay_ms: u64) -> Self {
        self.login_delay_ms = delay_ms;
        self
    }
}
