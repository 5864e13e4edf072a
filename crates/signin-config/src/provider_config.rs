use crate::{
    APPLE_AUTHORIZATION_ENDPOINT, APPLE_ISSUER, APPLE_TOKEN_ENDPOINT, ConfigError,
    ConfigErrorResult, DEFAULT_CLIENT_ID, DEFAULT_REDIRECT_URI, DEFAULT_RESPONSE_MODE,
    DEFAULT_SCOPE, DEFAULT_TEAM_ID,
};

use serde::Deserialize;
use url::Url;

pub const RESPONSE_MODES: [&str; 3] = ["query", "fragment", "form_post"];

/// Authorization server and client registration.
///
/// Every value that goes into the authorization request or the token
/// request comes from here; nothing is compiled in.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Authorization endpoint opened in the user-agent
    pub authorization_endpoint: String,
    /// Token endpoint for the authorization-code grant
    pub token_endpoint: String,
    /// Expected `iss` claim of ID tokens
    pub issuer: String,
    /// Service identifier registered with the provider
    pub client_id: String,
    /// Pre-generated client secret, sent with the token request when set
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub scope: String,
    pub response_mode: String,
    /// Sent as the `team_id` authorization parameter when set
    pub team_id: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            authorization_endpoint: String::from(APPLE_AUTHORIZATION_ENDPOINT),
            token_endpoint: String::from(APPLE_TOKEN_ENDPOINT),
            issuer: String::from(APPLE_ISSUER),
            client_id: String::from(DEFAULT_CLIENT_ID),
            client_secret: None,
            redirect_uri: String::from(DEFAULT_REDIRECT_URI),
            scope: String::from(DEFAULT_SCOPE),
            response_mode: String::from(DEFAULT_RESPONSE_MODE),
            team_id: Some(String::from(DEFAULT_TEAM_ID)),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("provider.authorization_endpoint", &self.authorization_endpoint)?;
        Self::validate_url("provider.token_endpoint", &self.token_endpoint)?;
        Self::validate_url("provider.redirect_uri", &self.redirect_uri)?;

        if self.client_id.trim().is_empty() {
            return Err(ConfigError::provider("provider.client_id cannot be empty"));
        }

        if self.issuer.trim().is_empty() {
            return Err(ConfigError::provider("provider.issuer cannot be empty"));
        }

        if self.scope.trim().is_empty() {
            return Err(ConfigError::provider("provider.scope cannot be empty"));
        }

        if !RESPONSE_MODES.contains(&self.response_mode.as_str()) {
            return Err(ConfigError::provider(format!(
                "provider.response_mode must be one of {:?}, got '{}'",
                RESPONSE_MODES, self.response_mode
            )));
        }

        if let Some(ref team_id) = self.team_id
            && team_id.trim().is_empty()
        {
            return Err(ConfigError::provider(
                "provider.team_id cannot be empty when set",
            ));
        }

        Ok(())
    }

    fn validate_url(key: &str, value: &str) -> ConfigErrorResult<()> {
        let invalid = || {
            ConfigError::provider(format!(
                "{} must be an absolute http(s) URL, got '{}'",
                key, value
            ))
        };

        let url = Url::parse(value).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }

        Ok(())
    }
}
