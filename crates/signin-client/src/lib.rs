//! signin-client
//!
//! Authorization-code flow against a configurable OAuth 2.0 / OpenID
//! provider: request construction, code exchange, out-of-band callback
//! delivery and the orchestrator that ties them to a credential store.

pub mod auth_outcome;
pub mod authorization_request;
pub mod callback_bridge;
pub mod callback_payload;
pub mod error;
pub mod orchestrator;
pub mod token_exchanger;

pub use auth_outcome::AuthOutcome;
pub use authorization_request::AuthorizationRequest;
pub use callback_bridge::{CallbackBridge, CallbackSubscription};
pub use callback_payload::{CallbackPayload, OutOfBandCallback, RedirectResponse};
pub use error::{ClientError, Result as ClientResult};
pub use orchestrator::{AuthOrchestrator, AuthPhase};
pub use token_exchanger::{TokenExchanger, TokenResponse};

#[cfg(test)]
mod tests;

/// Message for a token response without an access token.
pub const FAILED_TO_RETRIEVE_TOKENS: &str = "Failed to retrieve tokens";
