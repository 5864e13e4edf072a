use crate::{ClientError, ClientResult, FAILED_TO_RETRIEVE_TOKENS};

use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use signin_config::ProviderConfig;
use signin_store::CredentialBundle;

/// Token endpoint response for the authorization-code grant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub id_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// OAuth error body (RFC 6749 section 5.2)
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
    client_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<&'a str>,
}

/// Turns an authorization code into a [`CredentialBundle`].
///
/// One attempt per call, no retry, and no timeout beyond the HTTP client's
/// default.
pub struct TokenExchanger {
    provider: ProviderConfig,
    client: ReqwestClient,
}

impl TokenExchanger {
    pub fn new(provider: ProviderConfig) -> Self {
        Self::with_client(provider, ReqwestClient::new())
    }

    pub fn with_client(provider: ProviderConfig, client: ReqwestClient) -> Self {
        Self { provider, client }
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    /// Accept an ID token delivered alongside the code as-is, or exchange
    /// the code when none was delivered.
    pub async fn obtain_tokens(
        &self,
        code: &str,
        id_token: Option<&str>,
    ) -> ClientResult<CredentialBundle> {
        match id_token {
            Some(id_token) => {
                log::debug!("ID token provided directly, skipping token exchange");
                Ok(CredentialBundle::id_token_only(id_token))
            }
            None => self.exchange(code).await,
        }
    }

    /// Exchange the code at the token endpoint.
    ///
    /// Succeeds only when the response carries a non-empty access token. A
    /// response without an ID token yields an empty `id_token`.
    pub async fn exchange(&self, code: &str) -> ClientResult<CredentialBundle> {
        log::debug!("Exchanging authorization code for tokens");

        let body = TokenRequest {
            grant_type: "authorization_code",
            code,
            redirect_uri: &self.provider.redirect_uri,
            client_id: &self.provider.client_id,
            client_secret: self.provider.client_secret.as_deref(),
        };

        let response = self
            .client
            .post(&self.provider.token_endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<TokenErrorResponse>(&text) {
                Ok(error) => log::error!(
                    "Token exchange error ({}): {} {}",
                    status,
                    error.error,
                    error.error_description.unwrap_or_default()
                ),
                Err(_) => log::error!("Token exchange error ({})", status),
            }
            return Err(ClientError::exchange(FAILED_TO_RETRIEVE_TOKENS));
        }

        let tokens: TokenResponse = response.json().await?;

        match tokens.access_token {
            Some(access_token) if !access_token.is_empty() => {
                log::debug!(
                    "Token exchange succeeded: id_token={}, refresh_token={}",
                    tokens.id_token.is_some(),
                    tokens.refresh_token.is_some()
                );
                Ok(CredentialBundle {
                    id_token: tokens.id_token.unwrap_or_default(),
                    access_token: Some(access_token),
                    refresh_token: tokens.refresh_token,
                })
            }
            _ => Err(ClientError::exchange(FAILED_TO_RETRIEVE_TOKENS)),
        }
    }
}
