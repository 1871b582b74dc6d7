//! Typed query parameters for endpoints that accept them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::{Condition, GuideType, VatMode};

/// Query parameters for the item price guide.
///
/// Every field is optional; unset fields are left out of the request so
/// the API applies its own defaults.
///
/// # Example
///
/// ```
/// use bricklink_rs::models::{Condition, GuideType, PriceGuideQuery};
///
/// let query = PriceGuideQuery::new()
///     .color_id(5)
///     .guide_type(GuideType::Sold)
///     .condition(Condition::New);
///
/// let params = query.to_params();
/// assert_eq!(params.get("color_id").map(String::as_str), Some("5"));
/// assert_eq!(params.get("new_or_used").map(String::as_str), Some("N"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceGuideQuery {
    /// Color of the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<i32>,
    /// Stock or sold guide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_type: Option<GuideType>,
    /// New or used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_or_used: Option<Condition>,
    /// ISO country code of the sellers' location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Region of the sellers' location (e.g. `europe`, `north_america`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO currency code for returned prices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// VAT handling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<VatMode>,
}

impl PriceGuideQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a color.
    pub fn color_id(mut self, color_id: i32) -> Self {
        self.color_id = Some(color_id);
        self
    }

    /// Choose the stock or sold guide.
    pub fn guide_type(mut self, guide_type: GuideType) -> Self {
        self.guide_type = Some(guide_type);
        self
    }

    /// Restrict to new or used items.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.new_or_used = Some(condition);
        self
    }

    /// Restrict to sellers in a country.
    pub fn country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Restrict to sellers in a region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Currency for returned prices.
    pub fn currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    /// VAT handling for returned prices.
    pub fn vat(mut self, vat: VatMode) -> Self {
        self.vat = Some(vat);
        self
    }

    /// Lower the query into the plain key/value map the price endpoint takes.
    pub fn to_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();

        if let Some(color_id) = self.color_id {
            params.insert("color_id".to_string(), color_id.to_string());
        }
        if let Some(guide_type) = self.guide_type {
            params.insert("guide_type".to_string(), guide_type.as_str().to_string());
        }
        if let Some(condition) = self.new_or_used {
            params.insert("new_or_used".to_string(), condition.as_str().to_string());
        }
        if let Some(ref country_code) = self.country_code {
            params.insert("country_code".to_string(), country_code.clone());
        }
        if let Some(ref region) = self.region {
            params.insert("region".to_string(), region.clone());
        }
        if let Some(ref currency_code) = self.currency_code {
            params.insert("currency_code".to_string(), currency_code.clone());
        }
        if let Some(vat) = self.vat {
            params.insert("vat".to_string(), vat.as_str().to_string());
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(PriceGuideQuery::new().to_params().is_empty());
    }

    #[test]
    fn test_full_query_params() {
        let params = PriceGuideQuery::new()
            .color_id(11)
            .guide_type(GuideType::Stock)
            .condition(Condition::Used)
            .country_code("DE")
            .region("europe")
            .currency_code("EUR")
            .vat(VatMode::Include)
            .to_params();

        assert_eq!(params.len(), 7);
        assert_eq!(params["color_id"], "11");
        assert_eq!(params["guide_type"], "stock");
        assert_eq!(params["new_or_used"], "U");
        assert_eq!(params["country_code"], "DE");
        assert_eq!(params["region"], "europe");
        assert_eq!(params["currency_code"], "EUR");
        assert_eq!(params["vat"], "Y");
    }

    #[test]
    fn test_serde_skips_unset_fields() {
        let query = PriceGuideQuery::new()
            .color_id(5)
            .guide_type(GuideType::Sold)
            .condition(Condition::Used);

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"color_id": 5, "guide_type": "sold", "new_or_used": "U"})
        );

        let back: PriceGuideQuery = serde_json::from_value(json).unwrap();
        assert_eq!(back, query);
        assert_eq!(back.to_params(), query.to_params());
    }
}
