use crate::{
    CredentialBundle, KEY_ACCESS_TOKEN, KEY_EMAIL, KEY_FIRST_NAME, KEY_ID_TOKEN, KEY_LAST_NAME,
    KEY_REFRESH_TOKEN, KEY_USER_ID, StoreErrorResult,
};

use signin_auth::Identity;

/// Persisted string key-value store for tokens and identity fields.
///
/// Writes are field-by-field; a crash between two `set` calls leaves a
/// partially written bundle. No locking beyond what an implementation needs
/// for its own consistency: concurrent writers race and the last write wins.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>>;

    /// `None` removes the key.
    fn set(&self, key: &str, value: Option<&str>) -> StoreErrorResult<()>;

    /// Remove every stored field.
    fn clear(&self) -> StoreErrorResult<()>;

    /// Persist all three token fields; absent tokens are removed so nothing
    /// from an earlier sign-in survives.
    fn save_bundle(&self, bundle: &CredentialBundle) -> StoreErrorResult<()> {
        self.set(KEY_ID_TOKEN, Some(&bundle.id_token))?;
        self.set(KEY_ACCESS_TOKEN, bundle.access_token.as_deref())?;
        self.set(KEY_REFRESH_TOKEN, bundle.refresh_token.as_deref())?;
        Ok(())
    }

    /// None when no ID token is stored.
    fn load_bundle(&self) -> StoreErrorResult<Option<CredentialBundle>> {
        let Some(id_token) = self.get(KEY_ID_TOKEN)? else {
            return Ok(None);
        };

        Ok(Some(CredentialBundle {
            id_token,
            access_token: self.get(KEY_ACCESS_TOKEN)?,
            refresh_token: self.get(KEY_REFRESH_TOKEN)?,
        }))
    }

    fn save_identity(&self, identity: &Identity) -> StoreErrorResult<()> {
        self.set(KEY_USER_ID, Some(&identity.id))?;
        self.set(KEY_EMAIL, identity.email.as_deref())?;
        self.set(KEY_FIRST_NAME, identity.first_name.as_deref())?;
        self.set(KEY_LAST_NAME, identity.last_name.as_deref())?;
        Ok(())
    }

    /// Rebuild the identity from persisted fields. None without a user id.
    fn load_identity(&self) -> StoreErrorResult<Option<Identity>> {
        let Some(id) = self.user_id()? else {
            return Ok(None);
        };

        Ok(Some(Identity {
            id,
            email: self.get(KEY_EMAIL)?,
            first_name: self.get(KEY_FIRST_NAME)?,
            last_name: self.get(KEY_LAST_NAME)?,
        }))
    }

    /// Stored user id; an empty value counts as absent.
    fn user_id(&self) -> StoreErrorResult<Option<String>> {
        Ok(self.get(KEY_USER_ID)?.filter(|id| !id.is_empty()))
    }

    fn is_logged_in(&self) -> StoreErrorResult<bool> {
        Ok(self.user_id()?.is_some())
    }
}
