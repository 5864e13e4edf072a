use crate::{AuthError, IdTokenClaims, Result as AuthErrorResult, decode_claims};

use std::panic::Location;

use error_location::ErrorLocation;

/// Post-hoc ID token checks: expiry, issuer and audience.
///
/// Opt-in; extraction never calls this. Signatures are not verified.
#[derive(Debug, Clone)]
pub struct IdTokenValidator {
    issuer: String,
    client_id: String,
}

impl IdTokenValidator {
    pub fn new(issuer: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            client_id: client_id.into(),
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// True only when the token is unexpired, from the expected issuer and
    /// addressed to this client.
    pub fn validate(&self, id_token: &str) -> bool {
        match self.check(id_token) {
            Ok(_) => true,
            Err(e) => {
                log::error!("ID token rejected: {}", e);
                false
            }
        }
    }

    /// Same checks as [`validate`](Self::validate), reporting which one failed.
    #[track_caller]
    pub fn check(&self, id_token: &str) -> AuthErrorResult<IdTokenClaims> {
        self.check_at(id_token, chrono::Utc::now().timestamp())
    }

    /// Check against an explicit clock (Unix seconds). Zero leeway: a token
    /// whose `exp` equals `now` is already expired.
    #[track_caller]
    pub fn check_at(&self, id_token: &str, now: i64) -> AuthErrorResult<IdTokenClaims> {
        let claims = decode_claims(id_token)?;

        match claims.exp {
            None => {
                return Err(AuthError::InvalidClaim {
                    claim: "exp".to_string(),
                    message: "exp claim is missing".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Some(exp) if exp <= now => {
                return Err(AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Some(_) => {}
        }

        if claims.iss.as_deref() != Some(self.issuer.as_str()) {
            return Err(AuthError::InvalidClaim {
                claim: "iss".to_string(),
                message: format!(
                    "expected '{}', got '{}'",
                    self.issuer,
                    claims.iss.as_deref().unwrap_or("")
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !claims.aud.iter().any(|aud| aud == &self.client_id) {
            return Err(AuthError::InvalidClaim {
                claim: "aud".to_string(),
                message: format!("{:?} does not contain '{}'", claims.aud, self.client_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }
}
