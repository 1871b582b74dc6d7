//! Items service for catalog item lookups.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::client::SignedRequester;
use crate::error::ValidationError;
use crate::models::{ItemType, PriceGuideQuery};
use crate::Result;

/// Service for catalog item operations.
///
/// Item types are matched case-insensitively against [`ItemType`] and are
/// sent in the path exactly as given.
///
/// # Example
///
/// ```no_run
/// use std::collections::HashMap;
///
/// # async fn example(client: bricklink_rs::BricklinkClient) -> bricklink_rs::Result<()> {
/// let item = client.items().get("PART", "3001").await?;
/// let image = client.items().image("PART", "3001", 5).await?;
///
/// let mut params = HashMap::new();
/// params.insert("color_id".to_string(), "5".to_string());
/// let price = client.items().price("PART", "3001", &params).await?;
/// # Ok(())
/// # }
/// ```
pub struct ItemsService<R> {
    inner: Arc<R>,
}

impl<R: SignedRequester> ItemsService<R> {
    pub(crate) fn new(inner: Arc<R>) -> Self {
        Self { inner }
    }

    /// Get a catalog item.
    pub async fn get(&self, item_type: &str, item_number: &str) -> Result<String> {
        let path = item_path(item_type, item_number)?;
        self.inner.request(Method::GET, &path).await
    }

    /// Get the image of an item in a given color.
    pub async fn image(&self, item_type: &str, item_number: &str, color_id: i32) -> Result<String> {
        let path = format!("{}/images/{}", item_path(item_type, item_number)?, color_id);
        self.inner.request(Method::GET, &path).await
    }

    /// Get the price guide of an item.
    ///
    /// `params` are appended as a query string when non-empty. Keys and
    /// values are sent as given, without percent-encoding.
    pub async fn price(
        &self,
        item_type: &str,
        item_number: &str,
        params: &HashMap<String, String>,
    ) -> Result<String> {
        let mut path = format!("{}/price", item_path(item_type, item_number)?);
        if !params.is_empty() {
            path.push('?');
            path.push_str(&build_query(params));
        }
        self.inner.request(Method::GET, &path).await
    }

    /// Get the price guide of an item using typed query options.
    pub async fn price_guide(
        &self,
        item_type: &str,
        item_number: &str,
        query: &PriceGuideQuery,
    ) -> Result<String> {
        self.price(item_type, item_number, &query.to_params()).await
    }
}

/// Validate an item reference and build its resource path.
fn item_path(item_type: &str, item_number: &str) -> Result<String> {
    item_type.parse::<ItemType>()?;

    if item_number.is_empty() {
        return Err(ValidationError::MissingParameter("item_number").into());
    }

    Ok(format!("/items/{}/{}", item_type, item_number))
}

/// Join params as `key=value` pairs. Order follows the map's iteration order.
fn build_query(params: &HashMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("SET", "1234-1").unwrap(), "/items/SET/1234-1");
        assert_eq!(item_path("part", "3001").unwrap(), "/items/part/3001");
    }

    #[test]
    fn test_item_path_validation() {
        match item_path("", "1234-1") {
            Err(Error::Validation(ValidationError::MissingParameter(param))) => {
                assert_eq!(param, "item_type")
            }
            other => panic!("Expected missing item_type, got {:?}", other),
        }

        match item_path("BRICK", "1234-1") {
            Err(Error::Validation(ValidationError::InvalidParameter { param, value })) => {
                assert_eq!(param, "item_type");
                assert_eq!(value, "BRICK");
            }
            other => panic!("Expected invalid item_type, got {:?}", other),
        }

        match item_path("SET", "") {
            Err(Error::Validation(ValidationError::MissingParameter(param))) => {
                assert_eq!(param, "item_number")
            }
            other => panic!("Expected missing item_number, got {:?}", other),
        }
    }

    #[test]
    fn test_build_query_is_unencoded() {
        let mut params = HashMap::new();
        params.insert("color_id".to_string(), "5".to_string());
        params.insert("region".to_string(), "north america".to_string());

        let query = build_query(&params);
        let mut pairs: Vec<&str> = query.split('&').collect();
        pairs.sort();
        assert_eq!(pairs, vec!["color_id=5", "region=north america"]);
    }
}
