//! Colors service for the catalog color table.

use std::sync::Arc;

use reqwest::Method;

use crate::client::SignedRequester;
use crate::Result;

/// Service for color operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: bricklink_rs::BricklinkClient) -> bricklink_rs::Result<()> {
/// let all = client.colors().list().await?;
/// let red = client.colors().get(5).await?;
/// # Ok(())
/// # }
/// ```
pub struct ColorsService<R> {
    inner: Arc<R>,
}

impl<R: SignedRequester> ColorsService<R> {
    pub(crate) fn new(inner: Arc<R>) -> Self {
        Self { inner }
    }

    /// List every catalog color.
    pub async fn list(&self) -> Result<String> {
        self.inner.request(Method::GET, "/colors").await
    }

    /// Get a single color.
    pub async fn get(&self, color_id: i32) -> Result<String> {
        self.inner
            .request(Method::GET, &format!("/colors/{}", color_id))
            .await
    }
}
