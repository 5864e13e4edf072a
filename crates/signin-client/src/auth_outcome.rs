use signin_auth::Identity;

/// Terminal result of one authorization attempt. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(Identity),
    Error(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Success(identity) => Some(identity),
            Self::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}
