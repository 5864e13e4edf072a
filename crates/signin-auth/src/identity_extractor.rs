use crate::{AuthError, IdTokenClaims, Identity, NameClaim, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::dangerous::insecure_decode;

/// Decode the claims of a compact JWT without checking its signature or
/// any claim.
///
/// Only the token structure is inspected, whatever the header's `alg`;
/// trust decisions belong to [`crate::IdTokenValidator`].
#[track_caller]
pub fn decode_claims(id_token: &str) -> AuthErrorResult<IdTokenClaims> {
    insecure_decode::<IdTokenClaims>(id_token)
        .map(|token_data| token_data.claims)
        .map_err(|e| AuthError::JwtDecode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Extract the user identity from an ID token.
///
/// Never fails: a token that cannot be decoded yields [`Identity::fallback`],
/// a random identifier with no other fields.
pub fn extract_identity(id_token: &str) -> Identity {
    match decode_claims(id_token) {
        Ok(claims) => {
            if claims.name.is_some() && claims.name() == NameClaim::default() {
                log::debug!("Name claim present but not in expected format");
            }
            Identity::from_claims(claims)
        }
        Err(e) => {
            log::error!("Error parsing ID token, using fallback identity: {}", e);
            Identity::fallback()
        }
    }
}
