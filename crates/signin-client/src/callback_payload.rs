use serde::Deserialize;

/// Authorization result handed over through a side channel: pasted by a
/// person or relayed from the web redirect endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfBandCallback {
    pub code: String,
    pub id_token: Option<String>,
    pub error: Option<String>,
}

impl OutOfBandCallback {
    pub fn new(code: impl Into<String>, id_token: Option<String>) -> Self {
        Self {
            code: code.into(),
            id_token: id_token.filter(|token| !token.trim().is_empty()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            id_token: None,
            error: Some(error.into()),
        }
    }
}

/// Fields the provider posts to the redirect URI (`response_mode=form_post`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RedirectResponse {
    pub code: Option<String>,
    pub id_token: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    /// JSON user profile, only sent on a user's first sign-in
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackPayload {
    OutOfBand(OutOfBandCallback),
    Redirect(RedirectResponse),
}

impl From<OutOfBandCallback> for CallbackPayload {
    fn from(callback: OutOfBandCallback) -> Self {
        CallbackPayload::OutOfBand(callback)
    }
}

impl From<RedirectResponse> for CallbackPayload {
    fn from(response: RedirectResponse) -> Self {
        CallbackPayload::Redirect(response)
    }
}
