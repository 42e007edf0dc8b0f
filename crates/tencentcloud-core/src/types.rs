//! Region and service identifiers.

use std::fmt;

/// Tencent Cloud region identifier, e.g. `ap-guangzhou`.
///
/// An empty region is allowed for services that are not regional; it is then
/// omitted from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Region(String);

impl Region {
    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the region is empty (non-regional call).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifies the remote service a client talks to.
///
/// The service name doubles as the endpoint prefix and as the service
/// component of the TC3 credential scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceDescriptor {
    /// Service name, e.g. `iai`.
    pub service: &'static str,
    /// API version, e.g. `2018-03-01`.
    pub version: &'static str,
}

impl ServiceDescriptor {
    /// Create a new descriptor.
    #[must_use]
    pub const fn new(service: &'static str, version: &'static str) -> Self {
        Self { service, version }
    }

    /// The default endpoint host under the given root domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use tencentcloud_core::ServiceDescriptor;
    ///
    /// let iai = ServiceDescriptor::new("iai", "2018-03-01");
    /// assert_eq!(iai.endpoint("tencentcloudapi.com"), "iai.tencentcloudapi.com");
    /// ```
    #[must_use]
    pub fn endpoint(&self, root_domain: &str) -> String {
        format!("{}.{root_domain}", self.service)
    }
}
