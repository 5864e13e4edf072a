use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential file {path} is corrupt: {source} {location}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize credentials: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Corrupt {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialize(source: serde_json::Error) -> Self {
        StoreError::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
