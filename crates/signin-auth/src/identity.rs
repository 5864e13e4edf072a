use crate::{IdTokenClaims, UserProfile};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed-in user as known to this client.
///
/// Rebuilt either from live ID token claims or from persisted fields;
/// neither source is authoritative, so any optional field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            first_name: None,
            last_name: None,
        }
    }

    /// Identity used when an ID token cannot be decoded at all.
    ///
    /// Carries a freshly generated identifier and nothing else. Callers get a
    /// usable (if anonymous) identity instead of an error.
    pub fn fallback() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn from_claims(claims: IdTokenClaims) -> Self {
        let name = claims.name();

        Self {
            id: claims.sub.unwrap_or_default(),
            email: claims.email,
            first_name: name.first_name,
            last_name: name.last_name,
        }
    }

    /// Fill fields the token did not carry from the first-login user profile.
    pub fn with_profile(mut self, profile: &UserProfile) -> Self {
        if self.email.is_none() {
            self.email = profile.email.clone();
        }
        if self.first_name.is_none() {
            self.first_name = profile.name.first_name.clone();
        }
        if self.last_name.is_none() {
            self.last_name = profile.name.last_name.clone();
        }
        self
    }

    /// First and last name joined by a space; None when both are absent.
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (None, None) => None,
            (first, last) => Some(
                [first.as_deref(), last.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}
