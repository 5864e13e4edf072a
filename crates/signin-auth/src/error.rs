use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Claim that failed validation, if any
    pub fn claim(&self) -> Option<&str> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim),
            Self::TokenExpired { .. } => Some("exp"),
            Self::JwtDecode { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
