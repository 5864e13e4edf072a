mod app;

use crate::App;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use signin_config::ProviderConfig;
use tempfile::TempDir;

pub(crate) fn test_app() -> (TempDir, App) {
    let temp = TempDir::new().unwrap();
    let app = App::new(
        ProviderConfig::default(),
        temp.path().join("credentials.json"),
    );
    (temp, app)
}

pub(crate) fn mint_id_token(claims: &Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

pub(crate) fn apple_id_token() -> String {
    mint_id_token(&json!({
        "sub": "001234.abcdef.0987",
        "email": "jane@privaterelay.appleid.com",
        "iss": "https://appleid.apple.com",
        "aud": "io.nunchuk.signin",
        "exp": chrono::Utc::now().timestamp() + 3600,
    }))
}
