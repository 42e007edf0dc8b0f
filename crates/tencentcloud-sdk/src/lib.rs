//! Typed async clients for Tencent Cloud APIs.
//!
//! Each service lives behind a cargo feature (all on by default) and exposes
//! one client whose methods map 1:1 onto remote operations:
//!
//! | Feature | Client | API version |
//! |---------|--------|-------------|
//! | `iai` | [`iai::IaiClient`] | `2018-03-01` |
//! | `tbaas` | [`tbaas::TbaasClient`] | `2018-04-16` |
//! | `tmt` | [`tmt::TmtClient`] | `2018-03-21` |
//!
//! ```no_run
//! use tencentcloud_sdk::tmt::{TextTranslateRequest, TmtClient};
//! use tencentcloud_sdk::{Credential, SdkError};
//!
//! # async fn run() -> Result<(), SdkError> {
//! let client = TmtClient::new(Credential::new("AKID...", "secret"), "ap-guangzhou")?;
//! let request = TextTranslateRequest {
//!     source_text: Some("你好".to_owned()),
//!     source: Some("zh".to_owned()),
//!     target: Some("en".to_owned()),
//!     project_id: Some(0),
//!     ..Default::default()
//! };
//! let response = client.text_translate(&request).await?;
//! println!("{:?} ({})", response.target_text, response.request_id);
//! # Ok(())
//! # }
//! ```

#[allow(unused_macros, unused_imports)]
mod macros;

#[cfg(feature = "iai")]
pub mod iai;
#[cfg(feature = "tbaas")]
pub mod tbaas;
#[cfg(feature = "tmt")]
pub mod tmt;

#[cfg(test)]
mod testing;

pub use tencentcloud_core::{
    ApiError, ClientProfile, ConfigError, Credential, CredentialError, CredentialProvider,
    DecodeError, EnvCredentialProvider, HttpMethod, HttpProfile, Language, Region, RequestError,
    SdkError, SdkResult, SignMethod, StaticCredentialProvider, TransportError, TransportErrorKind,
};
pub use tencentcloud_http::{ApiClient, HttpTransport, ReqwestTransport, TransportFuture};
