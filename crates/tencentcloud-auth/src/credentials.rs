//! Secret key lookup for signature verification.
//!
//! Verification needs to map the secret id found in a request back to its
//! secret key. Clients never use this module; they sign with a
//! `tencentcloud_core::Credential`.

use std::collections::HashMap;

use crate::error::AuthError;

/// Looks up secret keys by secret id.
pub trait SecretKeyProvider: Send + Sync {
    /// Retrieve the secret key for the given secret id.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SecretIdNotFound`] if the secret id is not recognized.
    fn get_secret_key(&self, secret_id: &str) -> Result<String, AuthError>;
}

/// In-memory secret store backed by a `HashMap`.
///
/// # Examples
///
/// ```
/// use tencentcloud_auth::credentials::{SecretKeyProvider, StaticSecretKeyProvider};
///
/// let provider = StaticSecretKeyProvider::new(vec![
///     ("AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE".to_owned(), "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE".to_owned()),
/// ]);
///
/// let secret = provider.get_secret_key("AKIDz8krbsJ5yKBZQpn74WFkmLPx3EXAMPLE").unwrap();
/// assert_eq!(secret, "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSecretKeyProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretKeyProvider {
    /// Create a store from (secret id, secret key) pairs.
    pub fn new(secrets: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            secrets: secrets.into_iter().collect(),
        }
    }
}

impl SecretKeyProvider for StaticSecretKeyProvider {
    fn get_secret_key(&self, secret_id: &str) -> Result<String, AuthError> {
        self.secrets
            .get(secret_id)
            .cloned()
            .ok_or_else(|| AuthError::SecretIdNotFound(secret_id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_return_secret_key_for_known_secret_id() {
        let provider = StaticSecretKeyProvider::new(vec![("AKID".to_owned(), "secret".to_owned())]);
        assert_eq!(provider.get_secret_key("AKID").unwrap(), "secret");
    }

    #[test]
    fn test_should_return_error_for_unknown_secret_id() {
        let provider = StaticSecretKeyProvider::default();
        assert!(matches!(
            provider.get_secret_key("UNKNOWN"),
            Err(AuthError::SecretIdNotFound(_))
        ));
    }
}
