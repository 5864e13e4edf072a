pub mod claims;
pub mod error;
pub mod id_token_validator;
pub mod identity;
pub mod identity_extractor;
pub mod user_profile;

pub use claims::{IdTokenClaims, NameClaim};
pub use error::{AuthError, Result};
pub use id_token_validator::IdTokenValidator;
pub use identity::Identity;
pub use identity_extractor::{decode_claims, extract_identity};
pub use user_profile::UserProfile;

#[cfg(test)]
mod tests;
