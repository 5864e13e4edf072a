use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, ProviderConfig, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SIGNIN_CONFIG_DIR env var, else use ./.signin/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SIGNIN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SIGNIN_CONFIG_DIR env var > ./.signin/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.provider.validate()?;
        self.store.validate()?;
        Ok(())
    }

    /// Absolute path of the credential store file.
    pub fn store_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(self.store.resolve(&config_dir))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  provider: client_id={}, issuer={}",
            self.provider.client_id, self.provider.issuer
        );
        info!(
            "  endpoints: authorize={}, token={}",
            self.provider.authorization_endpoint, self.provider.token_endpoint
        );
        info!(
            "  request: redirect_uri={}, scope=\"{}\", response_mode={}, team_id={}",
            self.provider.redirect_uri,
            self.provider.scope,
            self.provider.response_mode,
            self.provider.team_id.as_deref().unwrap_or("none")
        );
        info!(
            "  client_secret: {}",
            if self.provider.client_secret.is_some() {
                "configured"
            } else {
                "none"
            }
        );
        info!("  store: {}", self.store.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Provider
        Self::apply_env_string(
            "SIGNIN_AUTHORIZATION_ENDPOINT",
            &mut self.provider.authorization_endpoint,
        );
        Self::apply_env_string("SIGNIN_TOKEN_ENDPOINT", &mut self.provider.token_endpoint);
        Self::apply_env_string("SIGNIN_ISSUER", &mut self.provider.issuer);
        Self::apply_env_string("SIGNIN_CLIENT_ID", &mut self.provider.client_id);
        Self::apply_env_option_string("SIGNIN_CLIENT_SECRET", &mut self.provider.client_secret);
        Self::apply_env_string("SIGNIN_REDIRECT_URI", &mut self.provider.redirect_uri);
        Self::apply_env_string("SIGNIN_SCOPE", &mut self.provider.scope);
        Self::apply_env_option_string("SIGNIN_TEAM_ID", &mut self.provider.team_id);

        // Store
        Self::apply_env_string("SIGNIN_STORE_PATH", &mut self.store.path);

        // Logging
        Self::apply_env_parse("SIGNIN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SIGNIN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SIGNIN_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
