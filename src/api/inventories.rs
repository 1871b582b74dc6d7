//! Inventories service for the store's own lots.

use std::sync::Arc;

use reqwest::Method;

use crate::client::SignedRequester;
use crate::Result;

/// Service for store inventory operations.
pub struct InventoriesService<R> {
    inner: Arc<R>,
}

impl<R: SignedRequester> InventoriesService<R> {
    pub(crate) fn new(inner: Arc<R>) -> Self {
        Self { inner }
    }

    /// Get a store inventory entry.
    ///
    /// The id is sent as given; no check is made that it refers to an
    /// existing entry.
    pub async fn get(&self, inventory_id: i32) -> Result<String> {
        self.inner
            .request(Method::GET, &format!("/inventories/{}", inventory_id))
            .await
    }
}
