//! Durable key-value storage for the dashboard records
//!
//! Each key maps to one JSON file under the storage directory, wrapped in a
//! versioned envelope:
//!
//! ```json
//! { "version": 1, "value": { "mainColor": "#2d2519", ... } }
//! ```
//!
//! Writes are synchronous and atomic (temp file + rename), so every `save`
//! is durable before it returns and no flush step exists.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::constants::config::*;
use crate::error::{Error, Result};

/// Names of the independently persisted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    Title,
    Links,
    Theme,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::Title, ConfigKey::Links, ConfigKey::Theme];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Title => "title",
            ConfigKey::Links => "links",
            ConfigKey::Theme => "theme",
        }
    }

    fn file_name(&self) -> String {
        format!("{}.{FILE_EXTENSION}", self.as_str())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value stored under a fixed key with a compile-time default
pub trait Record: Serialize + DeserializeOwned + Default {
    const KEY: ConfigKey;
}

#[derive(Serialize)]
struct EnvelopeOut<'a, T> {
    version: u32,
    value: &'a T,
}

#[derive(Deserialize)]
struct EnvelopeIn {
    version: u32,
    value: serde_json::Value,
}

/// Handle to the storage directory. Cheap to clone; the files are the state.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        debug!(path = %root.display(), "Opened config store");
        Self { root }
    }

    /// `$GEARWORK_TAB_CONFIG_DIR`, else `<platform config dir>/gearwork-tab`
    pub fn default_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path
    }

    pub fn open_default() -> Self {
        Self::open(Self::default_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: ConfigKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Raw stored text for `key`, or `None` if it was never written
    pub fn load_raw(&self, key: ConfigKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Typed load; `None` if the record was never written
    pub fn load<R: Record>(&self) -> Result<Option<R>> {
        let Some(contents) = self.load_raw(R::KEY)? else {
            return Ok(None);
        };

        let envelope: EnvelopeIn = serde_json::from_str(&contents)
            .map_err(|source| Error::Deserialization { key: R::KEY, source })?;
        if envelope.version != SCHEMA_VERSION {
            return Err(Error::UnsupportedVersion {
                key: R::KEY,
                found: envelope.version,
            });
        }

        let record = serde_json::from_value(envelope.value)
            .map_err(|source| Error::Deserialization { key: R::KEY, source })?;
        Ok(Some(record))
    }

    /// Load for session startup: anything unreadable falls back to the default
    pub fn load_or_default<R: Record>(&self) -> R {
        match self.load::<R>() {
            Ok(Some(record)) => {
                info!(key = %R::KEY, "Loaded stored record");
                record
            }
            Ok(None) => {
                info!(key = %R::KEY, "No stored record, using default");
                R::default()
            }
            Err(e) if e.is_recoverable_read() => {
                warn!(key = %R::KEY, error = %e, "Stored record unreadable, using default");
                R::default()
            }
            Err(e) => {
                error!(key = %R::KEY, error = %e, "Failed to read stored record, using default");
                R::default()
            }
        }
    }

    /// Serialize and durably write `record`, replacing any prior value
    pub fn save<R: Record>(&self, record: &R) -> Result<()> {
        let envelope = EnvelopeOut {
            version: SCHEMA_VERSION,
            value: record,
        };
        let json = serde_json::to_string_pretty(&envelope)?;

        fs::create_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))?;

        let path = self.path_for(R::KEY);
        let tmp = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        fs::write(&tmp, json).map_err(|e| Error::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| Error::io(&path, e))?;

        info!(key = %R::KEY, path = %path.display(), "Saved record");
        Ok(())
    }

    /// Restore the compile-time default and persist it
    pub fn reset<R: Record>(&self) -> Result<R> {
        let record = R::default();
        self.save(&record)?;
        info!(key = %R::KEY, "Reset record to default");
        Ok(record)
    }
}
