//! Credentials and OAuth 1.0 request signing for the BrickLink API.
//!
//! BrickLink uses one-legged OAuth 1.0: there is no token exchange, the
//! four credentials from the BrickLink API registration page are used to
//! sign every request directly.
//!
//! ```
//! use bricklink_rs::auth::{OAuthSigner, SigningParams};
//! use bricklink_rs::Credentials;
//! use reqwest::Method;
//!
//! let signer = OAuthSigner::new(Credentials::new("ck", "cs", "tk", "ts"));
//! let params = SigningParams::new("nonce", 1_700_000_000);
//! let base = signer.signature_base_string(
//!     &Method::GET,
//!     "https://api.bricklink.com/api/store/v1/colors",
//!     &[] as &[(String, String)],
//!     &params,
//! );
//! assert!(base.starts_with("GET&https%3A%2F%2Fapi.bricklink.com"));
//! ```

mod credentials;
mod oauth;

pub use credentials::Credentials;
pub use oauth::{
    normalize_parameters, percent_encode, OAuthSigner, SigningParams, OAUTH_VERSION,
    SIGNATURE_METHOD,
};
