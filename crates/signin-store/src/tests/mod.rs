
use crate::CredentialBundle;

use signin_auth::Identity;

pub(crate) fn full_bundle() -> CredentialBundle {
    CredentialBundle {
        id_token: "id.token.value".to_string(),
        access_token: Some("access-1".to_string()),
        refresh_token: Some("refresh-1".to_string()),
    }
}

pub(crate) fn jane() -> Identity {
    Identity {
        id: "001234.abcdef.0987".to_string(),
        email: Some("jane@example.com".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
    }
}
