use crate::{
    AuthOutcome, AuthorizationRequest, CallbackBridge, CallbackPayload, CallbackSubscription,
    ClientError, ClientResult, OutOfBandCallback, RedirectResponse, TokenExchanger,
};

use std::sync::Mutex;

use signin_auth::{IdTokenValidator, Identity, UserProfile, extract_identity};
use signin_config::ProviderConfig;
use signin_store::{CredentialBundle, CredentialStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Idle,
    Exchanging,
}

/// Drives one sign-in at a time: builds the request, completes it from a
/// callback, persists the result and answers "who is signed in".
///
/// Attempts are not coordinated. Starting a new one while another is in
/// flight neither cancels nor deduplicates it, and concurrent sign-in and
/// sign-out race on the store (last write wins).
pub struct AuthOrchestrator<S: CredentialStore> {
    exchanger: TokenExchanger,
    validator: IdTokenValidator,
    store: S,
    bridge: CallbackBridge,
    pending_state: Mutex<Option<String>>,
    phase: Mutex<AuthPhase>,
}

impl<S: CredentialStore> AuthOrchestrator<S> {
    pub fn new(provider: ProviderConfig, store: S) -> Self {
        Self::with_exchanger(TokenExchanger::new(provider), store)
    }

    pub fn with_exchanger(exchanger: TokenExchanger, store: S) -> Self {
        let validator = IdTokenValidator::new(
            exchanger.provider().issuer.clone(),
            exchanger.provider().client_id.clone(),
        );

        Self {
            exchanger,
            validator,
            store,
            bridge: CallbackBridge::new(),
            pending_state: Mutex::new(None),
            phase: Mutex::new(AuthPhase::Idle),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bridge on which out-of-band callbacks for this orchestrator arrive.
    pub fn callback_bridge(&self) -> CallbackBridge {
        self.bridge.clone()
    }

    pub fn phase(&self) -> AuthPhase {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Build the authorization request to open in a user-agent.
    ///
    /// Remembers the state so a redirect response can be matched to it.
    pub fn begin_authorization(&self) -> ClientResult<AuthorizationRequest> {
        let request = AuthorizationRequest::build(self.exchanger.provider())?;

        *self.pending_state.lock().unwrap_or_else(|e| e.into_inner()) =
            Some(request.state.clone());

        log::info!("Authorization request created");
        Ok(request)
    }

    /// Complete an authorization from a callback and persist the result.
    ///
    /// Every failure becomes [`AuthOutcome::Error`]; nothing propagates.
    pub async fn complete_authorization(
        &self,
        payload: impl Into<CallbackPayload>,
    ) -> AuthOutcome {
        let result = {
            let _phase = PhaseGuard::enter(&self.phase);
            self.run(payload.into()).await
        };

        match result {
            Ok(identity) => {
                log::info!("Sign-in completed for user {}", identity.id);
                AuthOutcome::Success(identity)
            }
            Err(e) => {
                log::error!("Error handling authorization: {}", e);
                AuthOutcome::Error(e.message())
            }
        }
    }

    /// Wait for the next out-of-band callback on `subscription` and complete
    /// the authorization with it.
    pub async fn await_callback(&self, subscription: &mut CallbackSubscription) -> AuthOutcome {
        match subscription.recv().await {
            Some(callback) => self.complete_authorization(callback).await,
            None => AuthOutcome::Error("Callback channel closed".to_string()),
        }
    }

    /// Identity rebuilt from the store, without re-validating anything.
    pub fn current_identity(&self) -> ClientResult<Option<Identity>> {
        Ok(self.store.load_identity()?)
    }

    /// Stored tokens, if any.
    pub fn credentials(&self) -> ClientResult<Option<CredentialBundle>> {
        Ok(self.store.load_bundle()?)
    }

    /// A store that cannot be read counts as signed out.
    pub fn is_logged_in(&self) -> bool {
        match self.store.is_logged_in() {
            Ok(logged_in) => logged_in,
            Err(e) => {
                log::warn!("Cannot read credential store: {}", e);
                false
            }
        }
    }

    /// Opt-in check of expiry, issuer and audience.
    pub fn validate_id_token(&self, id_token: &str) -> bool {
        self.validator.validate(id_token)
    }

    pub fn validator(&self) -> &IdTokenValidator {
        &self.validator
    }

    /// Erase all stored credentials and identity fields.
    pub fn sign_out(&self) -> ClientResult<()> {
        self.store.clear()?;
        self.pending_state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        log::info!("Signed out");
        Ok(())
    }

    async fn run(&self, payload: CallbackPayload) -> ClientResult<Identity> {
        let (bundle, profile) = match payload {
            CallbackPayload::OutOfBand(callback) => {
                (self.tokens_from_out_of_band(callback).await?, None)
            }
            CallbackPayload::Redirect(response) => {
                let profile = response.user.as_deref().and_then(UserProfile::parse);
                (self.tokens_from_redirect(response).await?, profile)
            }
        };

        let mut identity = extract_identity(&bundle.id_token);
        if identity.id.is_empty() {
            return Err(ClientError::missing_subject());
        }
        if let Some(ref profile) = profile {
            identity = identity.with_profile(profile);
        }

        self.store.save_bundle(&bundle)?;
        self.store.save_identity(&identity)?;

        Ok(identity)
    }

    async fn tokens_from_out_of_band(
        &self,
        callback: OutOfBandCallback,
    ) -> ClientResult<CredentialBundle> {
        if let Some(error) = callback.error {
            return Err(ClientError::denied(error));
        }

        let code = callback.code.trim();
        if code.is_empty() {
            return Err(ClientError::invalid_callback("Authorization code is required"));
        }

        log::debug!("Processing direct authorization code");
        self.exchanger
            .obtain_tokens(code, callback.id_token.as_deref())
            .await
    }

    async fn tokens_from_redirect(
        &self,
        response: RedirectResponse,
    ) -> ClientResult<CredentialBundle> {
        if let Some(error) = response.error {
            return Err(ClientError::denied(error));
        }

        let pending = self
            .pending_state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let (Some(expected), Some(received)) = (pending.as_deref(), response.state.as_deref())
            && expected != received
        {
            return Err(ClientError::state_mismatch());
        }

        let Some(code) = response.code.filter(|code| !code.is_empty()) else {
            return Err(ClientError::invalid_callback("Authorization response is null"));
        };

        let bundle = self.exchanger.exchange(&code).await?;
        self.pending_state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        Ok(bundle)
    }
}

/// Holds the phase at `Exchanging` and puts it back to `Idle` on drop, even
/// when the completing future is dropped mid-exchange.
struct PhaseGuard<'a> {
    phase: &'a Mutex<AuthPhase>,
}

impl<'a> PhaseGuard<'a> {
    fn enter(phase: &'a Mutex<AuthPhase>) -> Self {
        *phase.lock().unwrap_or_else(|e| e.into_inner()) = AuthPhase::Exchanging;
        Self { phase }
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner()) = AuthPhase::Idle;
    }
}
