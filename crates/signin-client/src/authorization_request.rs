use crate::{ClientError, ClientResult};

use reqwest::Url;
use signin_config::ProviderConfig;
use uuid::Uuid;

/// A ready-to-open authorization URL and the state it was issued with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: String,
}

impl AuthorizationRequest {
    /// Build the request with a fresh random state. No I/O.
    pub fn build(provider: &ProviderConfig) -> ClientResult<Self> {
        Self::build_with_state(provider, Uuid::new_v4().to_string())
    }

    pub fn build_with_state(provider: &ProviderConfig, state: String) -> ClientResult<Self> {
        let mut params: Vec<(&str, &str)> = vec![
            ("client_id", provider.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", provider.redirect_uri.as_str()),
            ("scope", provider.scope.as_str()),
            ("response_mode", provider.response_mode.as_str()),
            ("state", state.as_str()),
        ];

        if let Some(ref team_id) = provider.team_id {
            params.push(("team_id", team_id.as_str()));
        }

        let url = Url::parse_with_params(&provider.authorization_endpoint, &params)
            .map_err(|e| ClientError::url(format!("{}: {}", provider.authorization_endpoint, e)))?;

        Ok(Self {
            url: url.to_string(),
            state,
        })
    }
}
