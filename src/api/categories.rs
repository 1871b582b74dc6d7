//! Categories service for the catalog category tree.

use std::sync::Arc;

use reqwest::Method;

use crate::client::SignedRequester;
use crate::Result;

/// Service for category operations.
pub struct CategoriesService<R> {
    inner: Arc<R>,
}

impl<R: SignedRequester> CategoriesService<R> {
    pub(crate) fn new(inner: Arc<R>) -> Self {
        Self { inner }
    }

    /// List every catalog category.
    pub async fn list(&self) -> Result<String> {
        self.inner.request(Method::GET, "/categories").await
    }

    /// Get a single category.
    pub async fn get(&self, category_id: i32) -> Result<String> {
        self.inner
            .request(Method::GET, &format!("/categories/{}", category_id))
            .await
    }
}
