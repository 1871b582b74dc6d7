//! HTTP client and service layer for the BrickLink API.
//!
//! This module provides the main entry point [`BricklinkClient`] and the
//! [`SignedRequester`] seam it dispatches through.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use bricklink_rs::{BricklinkClient, ClientConfig, Credentials};
//!
//! # async fn example() -> bricklink_rs::Result<()> {
//! let client = BricklinkClient::with_config(
//!     Credentials::new("consumer-key", "consumer-secret", "token", "token-secret"),
//!     ClientConfig::default().with_timeout(Duration::from_secs(10)),
//! )?;
//!
//! let categories = client.categories().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod dispatcher;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use dispatcher::{HttpDispatcher, SignedRequester};
pub use http::BricklinkClient;
