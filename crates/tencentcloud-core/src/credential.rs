//! Credentials and credential providers.
//!
//! A [`Credential`] is the (secret id, secret key, optional session token)
//! triple used to sign requests. A client asks its [`CredentialProvider`] once,
//! when it is built, and signs every call with that credential. Picking up a
//! rotated secret means building a new client.

use std::fmt;

use crate::error::CredentialError;

/// Signing credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Public key identifier (`AKID...`).
    pub secret_id: String,
    /// Secret signing key.
    pub secret_key: String,
    /// Session token for temporary credentials.
    pub token: Option<String>,
}

impl Credential {
    /// Create a long-term credential.
    #[must_use]
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: None,
        }
    }

    /// Attach a session token (temporary credential).
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"***")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Source of signing credentials.
///
/// Clients call [`credential`] once, at construction.
///
/// [`credential`]: CredentialProvider::credential
pub trait CredentialProvider: Send + Sync {
    /// Return the credential a client signs with.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if no credential is available.
    fn credential(&self) -> Result<Credential, CredentialError>;
}

/// Provider that always returns the same credential.
///
/// # Examples
///
/// ```
/// use tencentcloud_core::{Credential, CredentialProvider, StaticCredentialProvider};
///
/// let provider = StaticCredentialProvider::new(Credential::new("AKIDEXAMPLE", "secret"));
/// assert_eq!(provider.credential().unwrap().secret_id, "AKIDEXAMPLE");
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider for a fixed credential.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credential(&self) -> Result<Credential, CredentialError> {
        Ok(self.credential.clone())
    }
}

impl From<Credential> for StaticCredentialProvider {
    fn from(credential: Credential) -> Self {
        Self::new(credential)
    }
}

/// Provider reading `TENCENTCLOUD_SECRET_ID`, `TENCENTCLOUD_SECRET_KEY` and
/// the optional `TENCENTCLOUD_SESSION_TOKEN` each time it is asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Secret id variable.
    pub const SECRET_ID: &'static str = "TENCENTCLOUD_SECRET_ID";
    /// Secret key variable.
    pub const SECRET_KEY: &'static str = "TENCENTCLOUD_SECRET_KEY";
    /// Session token variable.
    pub const SESSION_TOKEN: &'static str = "TENCENTCLOUD_SESSION_TOKEN";

    /// Resolve a credential through an arbitrary key lookup.
    pub fn resolve<F>(lookup: F) -> Result<Credential, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let secret_id = get(Self::SECRET_ID)
            .ok_or_else(|| CredentialError::Missing(Self::SECRET_ID.to_owned()))?;
        let secret_key = get(Self::SECRET_KEY)
            .ok_or_else(|| CredentialError::Missing(Self::SECRET_KEY.to_owned()))?;

        let mut credential = Credential::new(secret_id, secret_key);
        credential.token = get(Self::SESSION_TOKEN);
        Ok(credential)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn credential(&self) -> Result<Credential, CredentialError> {
        Self::resolve(|key| std::env::var(key).ok())
    }
}
