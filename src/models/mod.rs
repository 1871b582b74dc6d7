//! Data models for the BrickLink API.
//!
//! Responses are returned to the caller as raw bodies, so the models here
//! only cover request inputs:
//!
//! - [`enums`] - Item types and price guide options
//! - [`query`] - Typed query parameter builders

pub mod enums;
pub mod query;

pub use enums::*;
pub use query::*;
