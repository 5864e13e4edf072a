use crate::ProviderConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_provider_when_validate_then_ok() {
    assert_that!(ProviderConfig::default().validate(), ok(anything()));
}

#[test]
fn given_relative_token_endpoint_when_validate_then_error_names_key() {
    // Given
    let provider = ProviderConfig {
        token_endpoint: String::from("/auth/token"),
        ..ProviderConfig::default()
    };

    // When
    let result = provider.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("provider.token_endpoint"));
}

#[test]
fn given_bare_scheme_redirect_uri_when_validate_then_error() {
    let provider = ProviderConfig {
        redirect_uri: String::from("https://"),
        ..ProviderConfig::default()
    };

    let result = provider.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("provider.redirect_uri"));
}

#[test]
fn given_empty_client_id_when_validate_then_error() {
    let provider = ProviderConfig {
        client_id: String::from("  "),
        ..ProviderConfig::default()
    };

    let result = provider.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("client_id"));
}

#[test]
fn given_empty_team_id_when_validate_then_error() {
    let provider = ProviderConfig {
        team_id: Some(String::new()),
        ..ProviderConfig::default()
    };

    assert_that!(provider.validate(), err(anything()));
}

#[test]
fn given_no_team_id_when_validate_then_ok() {
    let provider = ProviderConfig {
        team_id: None,
        ..ProviderConfig::default()
    };

    assert_that!(provider.validate(), ok(anything()));
}

#[test]
fn given_space_in_authorization_host_when_validate_then_error() {
    let provider = ProviderConfig {
        authorization_endpoint: String::from("https://exa mple.com/auth/authorize"),
        ..ProviderConfig::default()
    };

    let result = provider.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("provider.authorization_endpoint"));
}

#[test]
fn given_non_http_scheme_token_endpoint_when_validate_then_error() {
    let provider = ProviderConfig {
        token_endpoint: String::from("ftp://appleid.apple.com/auth/token"),
        ..ProviderConfig::default()
    };

    assert_that!(provider.validate(), err(anything()));
}

#[test]
fn given_http_localhost_token_endpoint_when_validate_then_ok() {
    let provider = ProviderConfig {
        token_endpoint: String::from("http://127.0.0.1:8080/auth/token"),
        ..ProviderConfig::default()
    };

    assert_that!(provider.validate(), ok(anything()));
}
