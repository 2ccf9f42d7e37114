//! Error kinds shared by the geometry kernel and the config models

use std::path::PathBuf;

use thiserror::Error;

use crate::store::ConfigKey;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A geometry or model function was called outside its documented domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A persisted record could not be read back.
    #[error("stored `{key}` record is unreadable: {source}")]
    Deserialization {
        key: ConfigKey,
        #[source]
        source: serde_json::Error,
    },

    /// The stored envelope carries a schema version this build doesn't know.
    #[error("stored `{key}` record has unsupported version {found}")]
    UnsupportedVersion { key: ConfigKey, found: u32 },

    /// Link slot index outside `[0, len)`.
    #[error("link slot index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the kinds the session recovers from by falling back to defaults
    pub fn is_recoverable_read(&self) -> bool {
        matches!(
            self,
            Error::Deserialization { .. } | Error::UnsupportedVersion { .. }
        )
    }
}
