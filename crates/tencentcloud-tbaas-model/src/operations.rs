//! TBaaS operation enum.

use std::fmt;

/// All supported TBaaS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TbaasOperation {
    /// Submit a transaction.
    Invoke,
    /// Query chaincode state.
    Query,
    /// Look up the validation result of a submitted transaction.
    GetInvokeTx,
}

impl TbaasOperation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 3] = [Self::Invoke, Self::Query, Self::GetInvokeTx];

    /// Returns the remote action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoke => "Invoke",
            Self::Query => "Query",
            Self::GetInvokeTx => "GetInvokeTx",
        }
    }

    /// Parse a remote action name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Invoke" => Some(Self::Invoke),
            "Query" => Some(Self::Query),
            "GetInvokeTx" => Some(Self::GetInvokeTx),
            _ => None,
        }
    }
}

impl fmt::Display for TbaasOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
