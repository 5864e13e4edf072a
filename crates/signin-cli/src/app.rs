use crate::{CliError, CliResult, Commands};

use std::path::PathBuf;

use serde_json::{Value, json};
use signin_auth::Identity;
use signin_client::{AuthOrchestrator, AuthOutcome, OutOfBandCallback};
use signin_config::{Config, ProviderConfig};
use signin_store::FileCredentialStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// The `signin` command surface over one orchestrator and its file store.
pub struct App {
    orchestrator: AuthOrchestrator<FileCredentialStore>,
}

impl App {
    pub fn new(provider: ProviderConfig, store_path: PathBuf) -> Self {
        Self {
            orchestrator: AuthOrchestrator::new(provider, FileCredentialStore::new(store_path)),
        }
    }

    pub fn from_config(config: &Config) -> CliResult<Self> {
        let store_path = config.store_path()?;
        log::debug!("Credential store: {}", store_path.display());
        Ok(Self::new(config.provider.clone(), store_path))
    }

    pub fn orchestrator(&self) -> &AuthOrchestrator<FileCredentialStore> {
        &self.orchestrator
    }

    pub async fn execute(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Begin => self.begin(),
            Commands::Complete { code, id_token } => {
                let outcome = self
                    .orchestrator
                    .complete_authorization(OutOfBandCallback::new(code, id_token))
                    .await;
                Self::outcome_to_json(outcome)
            }
            Commands::Wait => {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                self.wait_for_callback(stdin).await
            }
            Commands::Whoami => self.whoami(),
            Commands::Status => Ok(json!({ "signed_in": self.orchestrator.is_logged_in() })),
            Commands::Validate { id_token } => self.validate(id_token),
            Commands::Logout => {
                self.orchestrator.sign_out()?;
                Ok(json!({ "signed_out": true }))
            }
        }
    }

    fn begin(&self) -> CliResult<Value> {
        let request = self.orchestrator.begin_authorization()?;
        Ok(json!({ "url": request.url, "state": request.state }))
    }

    /// Register on the callback bridge, feed it the first line of `reader`
    /// from a background task, and complete sign-in with whatever arrives.
    pub async fn wait_for_callback<R>(&self, reader: R) -> CliResult<Value>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let bridge = self.orchestrator.callback_bridge();
        let mut subscription = bridge.register();

        let request = self.orchestrator.begin_authorization()?;
        eprintln!("Open this URL in a browser and sign in:");
        eprintln!();
        eprintln!("  {}", request.url);
        eprintln!();
        eprintln!("Then paste the authorization code (and optionally the ID token):");

        let publisher = bridge.clone();
        tokio::spawn(async move {
            let mut lines = reader.lines();
            let callback = match lines.next_line().await {
                Ok(Some(line)) => parse_callback_line(&line),
                Ok(None) => OutOfBandCallback::error("No authorization code entered"),
                Err(e) => OutOfBandCallback::error(format!("Failed to read input: {}", e)),
            };
            publisher.publish(callback);
        });

        let outcome = self.orchestrator.await_callback(&mut subscription).await;
        subscription.unregister();

        Self::outcome_to_json(outcome)
    }

    fn whoami(&self) -> CliResult<Value> {
        match self.orchestrator.current_identity()? {
            Some(identity) => Ok(identity_to_json(&identity)),
            None => Err(CliError::not_signed_in()),
        }
    }

    fn validate(&self, id_token: Option<String>) -> CliResult<Value> {
        let id_token = match id_token {
            Some(token) => token,
            None => match self.orchestrator.credentials()? {
                Some(bundle) => bundle.id_token,
                None => return Err(CliError::not_signed_in()),
            },
        };

        Ok(json!({ "valid": self.orchestrator.validate_id_token(&id_token) }))
    }

    fn outcome_to_json(outcome: AuthOutcome) -> CliResult<Value> {
        match outcome {
            AuthOutcome::Success(identity) => Ok(identity_to_json(&identity)),
            AuthOutcome::Error(message) => Err(CliError::Auth { message }),
        }
    }
}

/// `"<code> [id_token]"`, whitespace separated.
pub fn parse_callback_line(line: &str) -> OutOfBandCallback {
    let mut parts = line.split_whitespace();
    let code = parts.next().unwrap_or_default();
    let id_token = parts.next().map(String::from);
    OutOfBandCallback::new(code, id_token)
}

fn identity_to_json(identity: &Identity) -> Value {
    json!({
        "id": identity.id,
        "email": identity.email,
        "first_name": identity.first_name,
        "last_name": identity.last_name,
        "full_name": identity.full_name(),
    })
}
