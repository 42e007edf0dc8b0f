//! Request signing for Tencent Cloud APIs.
//!
//! Two signature families are supported:
//!
//! - **TC3-HMAC-SHA256** ([`tc3`]): a header-based signature over a canonical
//!   request. This is the default for every client.
//! - **HmacSHA1 / HmacSHA256** ([`legacy`]): a signature over the sorted,
//!   flattened parameter list, carried in the parameters themselves.
//!
//! Both sides are implemented: the signing side used by the HTTP client, and a
//! verification side used by local test servers to check what clients send.
//!
//! # Usage
//!
//! ```rust
//! use tencentcloud_auth::tc3::{Tc3Request, sign_tc3};
//!
//! let authorization = sign_tc3(&Tc3Request {
//!     secret_id: "AKIDEXAMPLE",
//!     secret_key: "secret",
//!     service: "iai",
//!     host: "iai.tencentcloudapi.com",
//!     method: "POST",
//!     query: "",
//!     content_type: "application/json; charset=utf-8",
//!     payload: b"{}",
//!     timestamp: 1_551_113_065,
//! })
//! .unwrap();
//! assert!(authorization.starts_with("TC3-HMAC-SHA256 Credential=AKIDEXAMPLE/2019-02-25/iai/tc3_request"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction for TC3
//! - [`credentials`] - Secret key lookup used during verification
//! - [`error`] - Authentication error types
//! - [`legacy`] - HmacSHA1/HmacSHA256 parameter signatures
//! - [`tc3`] - TC3-HMAC-SHA256 signing and verification

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod legacy;
pub mod tc3;

pub use credentials::{SecretKeyProvider, StaticSecretKeyProvider};
pub use error::AuthError;
pub use legacy::{sign_legacy, verify_legacy};
pub use tc3::{AuthResult, hash_payload, sign_tc3, verify_tc3};
