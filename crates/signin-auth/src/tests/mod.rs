
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};

pub(crate) const TEST_ISSUER: &str = "https://appleid.apple.com";
pub(crate) const TEST_CLIENT_ID: &str = "io.nunchuk.signin";

/// Mint an HS256 token; signatures are never verified, any key works.
pub(crate) fn create_test_token(claims: &Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

pub(crate) fn valid_claims() -> Value {
    json!({
        "sub": "001234.abcdef.0987",
        "email": "jane@privaterelay.appleid.com",
        "iss": TEST_ISSUER,
        "aud": [TEST_CLIENT_ID],
        "exp": chrono::Utc::now().timestamp() + 3600,
        "iat": chrono::Utc::now().timestamp(),
    })
}

/// Token shaped like a provider-issued one: asymmetric `alg`, a `kid`, and a
/// signature segment no key here could verify.
pub(crate) fn create_provider_token(alg: &str, claims: &Value) -> String {
    let header = json!({ "alg": alg, "kid": "W6WcOKB" });
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(claims.to_string()),
        URL_SAFE_NO_PAD.encode(b"not-a-real-signature"),
    )
}
