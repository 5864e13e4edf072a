mod config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod store_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use store_config::StoreConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "SIGNIN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".signin";
const CONFIG_FILENAME: &str = "config.toml";

pub const APPLE_AUTHORIZATION_ENDPOINT: &str = "https://appleid.apple.com/auth/authorize";
pub const APPLE_TOKEN_ENDPOINT: &str = "https://appleid.apple.com/auth/token";
pub const APPLE_ISSUER: &str = "https://appleid.apple.com";

const DEFAULT_CLIENT_ID: &str = "io.nunchuk.signin";
const DEFAULT_REDIRECT_URI: &str = "https://api.nunchuk.io/v1.1/passport/apple/signin_callback";
const DEFAULT_TEAM_ID: &str = "9568FP2WHH";
const DEFAULT_SCOPE: &str = "name email";
const DEFAULT_RESPONSE_MODE: &str = "form_post";

const DEFAULT_STORE_PATH: &str = "credentials.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
