//! Core types, configuration, and the error taxonomy for Tencent Cloud API clients.
//!
//! This crate provides the foundational building blocks shared by the signing,
//! codec, transport and per-service crates: credentials and credential
//! providers, regions, service descriptors, client/HTTP profiles, and the
//! three-way error taxonomy (`TransportError`, `DecodeError`, `ApiError`)
//! surfaced by every API invocation.

mod config;
mod credential;
mod error;
mod types;

pub use config::{ClientProfile, HttpMethod, HttpProfile, Language, SignMethod};
pub use credential::{
    Credential, CredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
};
pub use error::{
    ApiError, ConfigError, CredentialError, DecodeError, RequestError, SdkError, SdkResult,
    TransportError, TransportErrorKind,
};
pub use types::{Region, ServiceDescriptor};
