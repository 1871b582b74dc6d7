//! OAuth 1.0 credential set for the BrickLink API.

use secrecy::{ExposeSecret, SecretString};

/// The four credentials BrickLink issues for API access.
///
/// Keys are public identifiers; the two secrets are only ever used to
/// build the HMAC signing key and never leave the process. Nothing is
/// validated here: bad credentials surface as a rejected request.
///
/// # Example
///
/// ```
/// use bricklink_rs::Credentials;
///
/// let credentials = Credentials::new(
///     "consumer-key",
///     "consumer-secret",
///     "token",
///     "token-secret",
/// );
/// assert_eq!(credentials.consumer_key(), "consumer-key");
/// ```
pub struct Credentials {
    consumer_key: String,
    consumer_secret: SecretString,
    token: String,
    token_secret: SecretString,
}

impl Credentials {
    /// Create a credential set.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: SecretString::from(consumer_secret.into()),
            token: token.into(),
            token_secret: SecretString::from(token_secret.into()),
        }
    }

    /// The consumer key (`oauth_consumer_key`).
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// The access token (`oauth_token`).
    pub fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn consumer_secret(&self) -> &str {
        self.consumer_secret.expose_secret()
    }

    pub(crate) fn token_secret(&self) -> &str {
        self.token_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("token", &self.token)
            .field("token_secret", &"[REDACTED]")
            .finish()
    }
}
