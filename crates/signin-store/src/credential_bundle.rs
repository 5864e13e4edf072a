/// Tokens obtained from one successful authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialBundle {
    pub id_token: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl CredentialBundle {
    /// Bundle for an ID token delivered out-of-band, without a token exchange.
    pub fn id_token_only(id_token: impl Into<String>) -> Self {
        Self {
            id_token: id_token.into(),
            access_token: None,
            refresh_token: None,
        }
    }
}
