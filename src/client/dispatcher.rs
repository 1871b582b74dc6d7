//! Signed request dispatch.
//!
//! [`SignedRequester`] is the only thing the services need from the
//! transport: send one authenticated request for a resource path and
//! hand back the raw body. [`HttpDispatcher`] is the real implementation;
//! tests substitute their own.

use std::future::Future;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::auth::{Credentials, OAuthSigner, SigningParams};
use crate::{Error, Result};

use super::config::ClientConfig;

/// Performs one signed request against the API.
///
/// `uri` is a resource path such as `/items/PART/3001/price`, optionally
/// followed by a literal `?key=value&...` query string. Implementations
/// return the response body on success and never retry.
pub trait SignedRequester: Send + Sync {
    /// Send the request and return the raw response body.
    fn request(&self, method: Method, uri: &str) -> impl Future<Output = Result<String>> + Send;
}

/// OAuth 1.0 signing dispatcher backed by `reqwest`.
pub struct HttpDispatcher {
    http: reqwest::Client,
    base_url: String,
    signer: OAuthSigner,
}

impl HttpDispatcher {
    /// Build a dispatcher from credentials and configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// constructed. Credentials are not checked.
    pub fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(credentials),
        })
    }

    /// The base URL resource paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SignedRequester for HttpDispatcher {
    async fn request(&self, method: Method, uri: &str) -> Result<String> {
        // Parse once so the signature covers exactly what goes on the wire.
        let url = Url::parse(&format!("{}{}", self.base_url, uri))?;
        let (signed_url, query_params) = signing_target(&url);

        let authorization = self.signer.authorization_header(
            &method,
            &signed_url,
            query_params.as_slice(),
            &SigningParams::generate(),
        )?;
        let authorization =
            HeaderValue::from_str(&authorization).map_err(|e| Error::InvalidHeader(e.to_string()))?;

        debug!(method = %method, path = url.path(), "dispatching signed request");

        let response = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl std::fmt::Debug for HttpDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDispatcher")
            .field("base_url", &self.base_url)
            .field("signer", &self.signer)
            .finish()
    }
}

/// Base URI and decoded query pairs of a parsed request URL.
///
/// The base URI is scheme, host, non-default port and path as the server
/// sees them; the fragment never leaves the client and is not signed.
fn signing_target(url: &Url) -> (String, Vec<(String, String)>) {
    let mut base = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        base.push_str(&format!(":{}", port));
    }
    base.push_str(url.path());

    let query = url.query().map(parse_query).unwrap_or_default();
    (base, query)
}

/// Decode a raw query string into the pairs that take part in the signature.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| s.to_string())
}
