//! # bricklink-rs
//!
//! An async Rust client for the BrickLink store API.
//!
//! Every request is signed with one-legged OAuth 1.0 (HMAC-SHA1) using the
//! four credentials issued on the BrickLink API registration page. Response
//! bodies are returned as raw strings; interpreting the JSON is up to the
//! caller.
//!
//! ## Features
//!
//! - **Catalog**: items, item images and price guides
//! - **Reference data**: colors and categories
//! - **Store**: inventory entries
//! - **Validation**: arguments are checked before anything is sent
//! - **Pluggable transport**: the client dispatches through the
//!   [`SignedRequester`] trait, so tests can swap in a double
//!
//! There is no retry, caching or pagination. Each call is exactly one
//! request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bricklink_rs::BricklinkClient;
//!
//! #[tokio::main]
//! async fn main() -> bricklink_rs::Result<()> {
//!     let client = BricklinkClient::new(
//!         "consumer-key",
//!         "consumer-secret",
//!         "token",
//!         "token-secret",
//!     )?;
//!
//!     let set = client.items().get("SET", "10179-1").await?;
//!     println!("{}", set);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Price Guide
//!
//! ```rust,no_run
//! use bricklink_rs::BricklinkClient;
//! use bricklink_rs::models::{Condition, GuideType, PriceGuideQuery};
//!
//! # async fn example(client: BricklinkClient) -> bricklink_rs::Result<()> {
//! let query = PriceGuideQuery::new()
//!     .color_id(5)
//!     .guide_type(GuideType::Sold)
//!     .condition(Condition::Used);
//!
//! let prices = client.items().price_guide("PART", "3001", &query).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{BricklinkClient, ClientConfig, HttpDispatcher, SignedRequester};
pub use error::{Error, Result, ValidationError};
pub use models::ItemType;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bricklink_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::client::{BricklinkClient, ClientConfig, SignedRequester};
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::models::{Condition, GuideType, ItemType, PriceGuideQuery, VatMode};
}
