//! Integration tests for the Tencent Cloud clients.
//!
//! Most tests run against [`MockServer`], a local HTTP server that verifies
//! the signature of every request it receives and answers with canned
//! response envelopes. Tests against the real cloud are marked `#[ignore]`
//! and read `TENCENTCLOUD_SECRET_ID` / `TENCENTCLOUD_SECRET_KEY`.
//!
//! Run the live tests with:
//! ```text
//! cargo test -p tencentcloud-integration -- --ignored
//! ```

use std::sync::{Arc, Once};

use tencentcloud_sdk::{Credential, CredentialProvider, StaticCredentialProvider};

mod server;

pub use server::{MockServer, RecordedRequest, Reply, SECRET_ID, SECRET_KEY};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Credentials the mock server accepts.
#[must_use]
pub fn test_credentials() -> Arc<dyn CredentialProvider> {
    credentials(SECRET_ID, SECRET_KEY)
}

/// Arbitrary static credentials.
#[must_use]
pub fn credentials(secret_id: &str, secret_key: &str) -> Arc<dyn CredentialProvider> {
    Arc::new(StaticCredentialProvider::new(Credential::new(
        secret_id, secret_key,
    )))
}

mod test_iai;
mod test_live;
mod test_signing;
mod test_tbaas;
mod test_tmt;
