use crate::NameClaim;

use serde_json::Value;

/// The `user` form field the provider posts to the redirect URI on a user's
/// first sign-in: `{"name": {"firstName", "lastName"}, "email"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: NameClaim,
    pub email: Option<String>,
}

impl UserProfile {
    /// Returns None for anything that is not a JSON object.
    pub fn parse(json: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Ignoring unparseable user profile: {}", e);
                return None;
            }
        };

        if !value.is_object() {
            return None;
        }

        Some(Self {
            name: value
                .get("name")
                .map(NameClaim::from_value)
                .unwrap_or_default(),
            email: value
                .get("email")
                .and_then(Value::as_str)
                .map(String::from),
        })
    }
}
