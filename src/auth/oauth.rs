//! One-legged OAuth 1.0 request signing (HMAC-SHA1).
//!
//! BrickLink authenticates every call with an OAuth 1.0 signature:
//!
//! 1. Collect the `oauth_*` protocol parameters plus the request's query
//!    parameters.
//! 2. Percent-encode every key and value (RFC 3986), sort by key then
//!    value and join as `key=value` pairs with `&`.
//! 3. Signature base string: `METHOD&pct(url)&pct(normalized params)`.
//! 4. Signing key: `pct(consumer_secret)&pct(token_secret)`.
//! 5. Signature: base64(HMAC-SHA1(signing key, base string)).
//!
//! The result is sent in an `Authorization: OAuth ...` header. Any
//! deviation in encoding or ordering makes the API answer 401.

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use rand::{distributions::Alphanumeric, Rng};
use reqwest::Method;
use sha1::Sha1;

use super::Credentials;
use crate::{Error, Result};

type HmacSha1 = Hmac<Sha1>;

/// Value of `oauth_signature_method`.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Value of `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 32;

/// Percent-encode a string the way OAuth 1.0 requires.
///
/// Only the RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass
/// through; everything else, including space, becomes `%XX`.
///
/// ```
/// use bricklink_rs::auth::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("a-b_c.d~e"), "a-b_c.d~e");
/// ```
pub fn percent_encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

/// Build the normalized parameter string used inside the base string.
pub fn normalize_parameters<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut encoded: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| {
            (
                percent_encode(k.as_ref()).into_owned(),
                percent_encode(v.as_ref()).into_owned(),
            )
        })
        .collect();

    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Per-request nonce and timestamp.
///
/// A fresh value is generated for every request; fixed values are only
/// useful for reproducing a known signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningParams {
    /// Single-use random token
    pub nonce: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl SigningParams {
    /// Create signing params with a fixed nonce and timestamp.
    pub fn new(nonce: impl Into<String>, timestamp: i64) -> Self {
        Self {
            nonce: nonce.into(),
            timestamp,
        }
    }

    /// Generate a random nonce and take the current time.
    pub fn generate() -> Self {
        let nonce = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();

        Self {
            nonce,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Signs requests with a [`Credentials`] set.
///
/// # Example
///
/// ```
/// use bricklink_rs::auth::{OAuthSigner, SigningParams};
/// use bricklink_rs::Credentials;
/// use reqwest::Method;
///
/// let signer = OAuthSigner::new(Credentials::new("ck", "cs", "tk", "ts"));
/// let header = signer.authorization_header(
///     &Method::GET,
///     "https://api.bricklink.com/api/store/v1/colors",
///     &[] as &[(String, String)],
///     &SigningParams::generate(),
/// )?;
/// assert!(header.starts_with("OAuth "));
/// # Ok::<(), bricklink_rs::Error>(())
/// ```
#[derive(Debug)]
pub struct OAuthSigner {
    credentials: Credentials,
}

impl OAuthSigner {
    /// Create a signer.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The credentials this signer uses.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Protocol parameters, `oauth_signature` excluded, sorted by key.
    fn protocol_params(&self, params: &SigningParams) -> [(&'static str, String); 6] {
        [
            ("oauth_consumer_key", self.credentials.consumer_key().to_string()),
            ("oauth_nonce", params.nonce.clone()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", params.timestamp.to_string()),
            ("oauth_token", self.credentials.token().to_string()),
            ("oauth_version", OAUTH_VERSION.to_string()),
        ]
    }

    /// Build the signature base string.
    ///
    /// `url` is scheme, host and path without a query; `query` holds the
    /// decoded query parameters of the request.
    pub fn signature_base_string<K, V>(
        &self,
        method: &Method,
        url: &str,
        query: &[(K, V)],
        params: &SigningParams,
    ) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let protocol = self.protocol_params(params);
        let all = protocol
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(query.iter().map(|(k, v)| (k.as_ref(), v.as_ref())));

        format!(
            "{}&{}&{}",
            method.as_str().to_ascii_uppercase(),
            percent_encode(url),
            percent_encode(&normalize_parameters(all)),
        )
    }

    /// HMAC-SHA1 the base string and base64 the digest.
    pub fn signature(&self, base_string: &str) -> Result<String> {
        let key = format!(
            "{}&{}",
            percent_encode(self.credentials.consumer_secret()),
            percent_encode(self.credentials.token_secret()),
        );

        // HMAC takes keys of any length, so this only fails on a broken backend.
        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| Error::Signature(e.to_string()))?;
        mac.update(base_string.as_bytes());

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Build the full `Authorization` header value for a request.
    pub fn authorization_header<K, V>(
        &self,
        method: &Method,
        url: &str,
        query: &[(K, V)],
        params: &SigningParams,
    ) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let base_string = self.signature_base_string(method, url, query, params);
        let signature = self.signature(&base_string)?;

        let mut fields: Vec<(&str, String)> = self.protocol_params(params).to_vec();
        fields.push(("oauth_signature", signature));
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let header = fields
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect::<Vec<_>>()
            .join(",");

        Ok(format!("OAuth {}", header))
    }
}
