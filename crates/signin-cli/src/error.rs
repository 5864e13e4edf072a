use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: signin_config::ConfigError,
    },

    #[error("{source}")]
    Client {
        #[from]
        source: signin_client::ClientError,
    },

    /// Authorization attempt ended in an error outcome
    #[error("Sign-in failed: {message}")]
    Auth { message: String },

    #[error("Not signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_signed_in() -> Self {
        CliError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
