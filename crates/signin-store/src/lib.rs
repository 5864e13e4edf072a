pub mod credential_bundle;
pub mod credential_store;
pub mod error;
pub mod file_store;
pub mod memory_store;

pub use credential_bundle::CredentialBundle;
pub use credential_store::CredentialStore;
pub use error::{Result as StoreErrorResult, StoreError};
pub use file_store::FileCredentialStore;
pub use memory_store::MemoryCredentialStore;

#[cfg(test)]
mod tests;

pub const KEY_ID_TOKEN: &str = "id_token";
pub const KEY_ACCESS_TOKEN: &str = "access_token";
pub const KEY_REFRESH_TOKEN: &str = "refresh_token";
pub const KEY_USER_ID: &str = "user_id";
pub const KEY_EMAIL: &str = "email";
pub const KEY_FIRST_NAME: &str = "first_name";
pub const KEY_LAST_NAME: &str = "last_name";
