use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors on the authorization pathway.
///
/// None of these escape [`crate::AuthOrchestrator::complete_authorization`];
/// they become [`crate::AuthOutcome::Error`] carrying [`ClientError::message`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or protocol failure talking to the token endpoint
    #[error("HTTP request error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Token endpoint answered, but without usable tokens
    #[error("Token exchange failed: {message} {location}")]
    Exchange {
        message: String,
        location: ErrorLocation,
    },

    /// The authorization server reported an explicit error
    #[error("Authorization denied: {reason} {location}")]
    Denied {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Invalid callback: {message} {location}")]
    InvalidCallback {
        message: String,
        location: ErrorLocation,
    },

    /// ID token decoded but carries no `sub`
    #[error("ID token has no subject {location}")]
    MissingSubject { location: ErrorLocation },

    #[error("State mismatch {location}")]
    StateMismatch { location: ErrorLocation },

    #[error("Invalid authorization URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential store error: {source} {location}")]
    Store {
        #[source]
        source: signin_store::StoreError,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn exchange<S: Into<String>>(message: S) -> Self {
        ClientError::Exchange {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn denied<S: Into<String>>(reason: S) -> Self {
        ClientError::Denied {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_callback<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidCallback {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_subject() -> Self {
        ClientError::MissingSubject {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn state_mismatch() -> Self {
        ClientError::StateMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url<S: Into<String>>(message: S) -> Self {
        ClientError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// User-facing message, without source location.
    pub fn message(&self) -> String {
        match self {
            Self::Transport { message, .. } => message.clone(),
            Self::Exchange { message, .. } => message.clone(),
            Self::Denied { reason, .. } => reason.clone(),
            Self::InvalidCallback { message, .. } => message.clone(),
            Self::MissingSubject { .. } => "ID token has no subject".to_string(),
            Self::StateMismatch { .. } => "State mismatch".to_string(),
            Self::Url { message, .. } => message.clone(),
            Self::Store { source, .. } => source.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<signin_store::StoreError> for ClientError {
    #[track_caller]
    fn from(err: signin_store::StoreError) -> Self {
        ClientError::Store {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
