//! Enumeration types for the BrickLink API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Type of catalog item.
///
/// Parsing is case-insensitive, so `"set"`, `"Set"` and `"SET"` all map
/// to [`ItemType::Set`].
///
/// # Example
///
/// ```
/// use bricklink_rs::models::ItemType;
///
/// let item_type: ItemType = "minifig".parse().unwrap();
/// assert_eq!(item_type, ItemType::Minifig);
/// assert_eq!(item_type.as_str(), "MINIFIG");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// Minifigure
    Minifig,
    /// Single part
    Part,
    /// Complete set
    Set,
    /// Book
    Book,
    /// Gear (clothing, bags, keychains, ...)
    Gear,
    /// Printed catalog
    Catalog,
    /// Building instructions
    Instruction,
    /// Unsorted lot
    UnsortedLot,
    /// Original box
    OriginalBox,
}

impl ItemType {
    /// Every item type the API accepts.
    pub const ALL: [ItemType; 9] = [
        ItemType::Minifig,
        ItemType::Part,
        ItemType::Set,
        ItemType::Book,
        ItemType::Gear,
        ItemType::Catalog,
        ItemType::Instruction,
        ItemType::UnsortedLot,
        ItemType::OriginalBox,
    ];

    /// The canonical wire token for this item type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Minifig => "MINIFIG",
            ItemType::Part => "PART",
            ItemType::Set => "SET",
            ItemType::Book => "BOOK",
            ItemType::Gear => "GEAR",
            ItemType::Catalog => "CATALOG",
            ItemType::Instruction => "INSTRUCTION",
            ItemType::UnsortedLot => "UNSORTED_LOT",
            ItemType::OriginalBox => "ORIGINAL_BOX",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::MissingParameter("item_type"));
        }

        ItemType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::InvalidParameter {
                param: "item_type",
                value: s.to_string(),
            })
    }
}

/// Which price guide to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GuideType {
    /// Items currently for sale
    #[default]
    Stock,
    /// Items sold in the last six months
    Sold,
}

impl GuideType {
    /// Wire value of the `guide_type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideType::Stock => "stock",
            GuideType::Sold => "sold",
        }
    }
}

/// Item condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// New
    #[serde(rename = "N")]
    New,
    /// Used
    #[serde(rename = "U")]
    Used,
}

impl Condition {
    /// Wire value of the `new_or_used` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "N",
            Condition::Used => "U",
        }
    }
}

/// How VAT is reflected in returned prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VatMode {
    /// Exclude VAT
    #[serde(rename = "N")]
    Exclude,
    /// Include VAT
    #[serde(rename = "Y")]
    Include,
    /// Include VAT as in Norway
    #[serde(rename = "O")]
    Norway,
}

impl VatMode {
    /// Wire value of the `vat` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            VatMode::Exclude => "N",
            VatMode::Include => "Y",
            VatMode::Norway => "O",
        }
    }
}
