//! The BrickLink client facade.

use std::sync::Arc;

use crate::api::{CategoriesService, ColorsService, InventoriesService, ItemsService};
use crate::auth::Credentials;
use crate::Result;

use super::config::ClientConfig;
use super::dispatcher::{HttpDispatcher, SignedRequester};

/// The main client for interacting with the BrickLink API.
///
/// The client hands out one service per resource group. Every service
/// method validates its arguments, builds the resource path and sends a
/// single signed request; the raw response body is returned untouched.
///
/// Cloning is cheap and clones share the same connection pool and
/// credentials, so one client can serve many concurrent callers.
///
/// # Example
///
/// ```no_run
/// use bricklink_rs::BricklinkClient;
///
/// # async fn example() -> bricklink_rs::Result<()> {
/// let client = BricklinkClient::new(
///     "consumer-key",
///     "consumer-secret",
///     "token",
///     "token-secret",
/// )?;
///
/// let item = client.items().get("SET", "10179-1").await?;
/// let colors = client.colors().list().await?;
/// # Ok(())
/// # }
/// ```
pub struct BricklinkClient<R = HttpDispatcher> {
    inner: Arc<R>,
}

impl BricklinkClient<HttpDispatcher> {
    /// Create a client for the production API with default configuration.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(consumer_key, consumer_secret, token, token_secret);
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let dispatcher = HttpDispatcher::new(credentials, &config)?;
        Ok(Self::with_requester(dispatcher))
    }
}

impl<R: SignedRequester> BricklinkClient<R> {
    /// Create a client around any [`SignedRequester`].
    pub fn with_requester(requester: R) -> Self {
        Self {
            inner: Arc::new(requester),
        }
    }

    /// Get the catalog items service.
    pub fn items(&self) -> ItemsService<R> {
        ItemsService::new(self.inner.clone())
    }

    /// Get the colors service.
    pub fn colors(&self) -> ColorsService<R> {
        ColorsService::new(self.inner.clone())
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService<R> {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the inventories service.
    pub fn inventories(&self) -> InventoriesService<R> {
        InventoriesService::new(self.inner.clone())
    }

    /// Get a reference to the underlying requester.
    pub fn requester(&self) -> &R {
        &self.inner
    }
}

impl<R> Clone for BricklinkClient<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for BricklinkClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BricklinkClient")
            .field("requester", &self.inner)
            .finish()
    }
}
