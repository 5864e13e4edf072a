use crate::app::parse_callback_line;
use crate::tests::{apple_id_token, mint_id_token, test_app};
use crate::{CliError, Commands};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};
use serde_json::json;

#[tokio::test]
async fn given_fresh_store_when_status_then_not_signed_in() {
    let (_temp, app) = test_app();

    let value = app.execute(Commands::Status).await.unwrap();

    assert_eq!(value, json!({ "signed_in": false }));
}

#[tokio::test]
async fn given_fresh_store_when_whoami_then_not_signed_in_error() {
    let (_temp, app) = test_app();

    let result = app.execute(Commands::Whoami).await;

    assert!(matches!(result, Err(CliError::NotSignedIn { .. })));
}

#[tokio::test]
async fn given_begin_when_executed_then_url_and_state_returned() {
    let (_temp, app) = test_app();

    let value = app.execute(Commands::Begin).await.unwrap();

    let url = value["url"].as_str().unwrap();
    let state = value["state"].as_str().unwrap();
    assert_that!(url, contains_substring("response_mode=form_post"));
    assert_that!(url, contains_substring(state));
}

#[tokio::test]
async fn given_code_and_id_token_when_complete_then_signed_in_and_persisted() {
    let (temp, app) = test_app();

    let value = app
        .execute(Commands::Complete {
            code: "c123".to_string(),
            id_token: Some(apple_id_token()),
        })
        .await
        .unwrap();

    assert_eq!(value["id"], "001234.abcdef.0987");
    assert_eq!(value["email"], "jane@privaterelay.appleid.com");
    assert!(value["full_name"].is_null());
    assert!(temp.path().join("credentials.json").exists());

    let whoami = app.execute(Commands::Whoami).await.unwrap();
    assert_eq!(whoami["id"], "001234.abcdef.0987");
}

#[tokio::test]
async fn given_signed_in_when_validate_stored_token_then_valid() {
    let (_temp, app) = test_app();
    app.execute(Commands::Complete {
        code: "c123".to_string(),
        id_token: Some(apple_id_token()),
    })
    .await
    .unwrap();

    let value = app
        .execute(Commands::Validate { id_token: None })
        .await
        .unwrap();

    assert_eq!(value, json!({ "valid": true }));
}

#[tokio::test]
async fn given_foreign_audience_token_when_validate_then_invalid() {
    let (_temp, app) = test_app();
    let token = mint_id_token(&json!({
        "sub": "user",
        "iss": "https://appleid.apple.com",
        "aud": "com.other.app",
        "exp": chrono::Utc::now().timestamp() + 3600,
    }));

    let value = app
        .execute(Commands::Validate {
            id_token: Some(token),
        })
        .await
        .unwrap();

    assert_eq!(value, json!({ "valid": false }));
}

#[tokio::test]
async fn given_no_stored_token_when_validate_then_not_signed_in() {
    let (_temp, app) = test_app();

    let result = app.execute(Commands::Validate { id_token: None }).await;

    assert!(matches!(result, Err(CliError::NotSignedIn { .. })));
}

#[tokio::test]
async fn given_signed_in_when_logout_then_status_signed_out() {
    let (_temp, app) = test_app();
    app.execute(Commands::Complete {
        code: "c123".to_string(),
        id_token: Some(apple_id_token()),
    })
    .await
    .unwrap();

    app.execute(Commands::Logout).await.unwrap();

    let value = app.execute(Commands::Status).await.unwrap();
    assert_eq!(value, json!({ "signed_in": false }));
}

#[tokio::test]
async fn given_pasted_line_when_waiting_then_signed_in_through_bridge() {
    let (_temp, app) = test_app();
    let input = format!("c123 {}\n", apple_id_token());
    let reader = std::io::Cursor::new(input.into_bytes());

    let value = app.wait_for_callback(reader).await.unwrap();

    assert_eq!(value["id"], "001234.abcdef.0987");
    assert!(!app.orchestrator().callback_bridge().has_subscriber());
}

#[tokio::test]
async fn given_empty_input_when_waiting_then_auth_error() {
    let (_temp, app) = test_app();
    let reader = std::io::Cursor::new(Vec::new());

    let result = app.wait_for_callback(reader).await;

    match result {
        Err(CliError::Auth { message }) => {
            assert_that!(message.as_str(), eq("No authorization code entered"))
        }
        other => panic!("expected auth error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn given_code_only_line_when_parsed_then_no_id_token() {
    let callback = parse_callback_line("  c123  ");

    assert_eq!(callback.code, "c123");
    assert_eq!(callback.id_token, None);
}

#[test]
fn given_code_and_token_line_when_parsed_then_both_set() {
    let callback = parse_callback_line("c123 a.b.c");

    assert_eq!(callback.code, "c123");
    assert_eq!(callback.id_token.as_deref(), Some("a.b.c"));
}
