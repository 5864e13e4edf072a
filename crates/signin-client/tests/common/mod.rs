#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use signin_config::ProviderConfig;
use wiremock::MockServer;

pub const TEST_CLIENT_ID: &str = "io.nunchuk.signin";
pub const TEST_ISSUER: &str = "https://appleid.apple.com";
pub const TEST_SUB: &str = "001234.abcdef.0987";

/// Provider whose token endpoint is the mock server.
pub fn provider_for(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        token_endpoint: format!("{}/auth/token", server.uri()),
        ..ProviderConfig::default()
    }
}

pub fn id_token_claims() -> Value {
    json!({
        "sub": TEST_SUB,
        "email": "jane@privaterelay.appleid.com",
        "iss": TEST_ISSUER,
        "aud": TEST_CLIENT_ID,
        "exp": chrono::Utc::now().timestamp() + 3600,
        "name": { "firstName": "Jane", "lastName": "Doe" },
    })
}

pub fn mint_id_token(claims: &Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

/// RS256-headed token with an unverifiable signature, as the provider issues.
pub fn provider_id_token(claims: &Value) -> String {
    let header = json!({ "alg": "RS256", "kid": "W6WcOKB" });
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(claims.to_string()),
        URL_SAFE_NO_PAD.encode(b"not-a-real-signature"),
    )
}
