//! TBaaS request types.

use serde::{Deserialize, Serialize};

use crate::types::PeerSet;

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Request for `Invoke`: submit a transaction to a chaincode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvokeRequest {
    /// Module name; always `transaction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// Operation name; always `invoke`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// Blockchain network id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaincode_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,

    /// Peers that endorse the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<PeerSet>>,

    /// Chaincode function to call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func_name: Option<String>,

    /// Organization the caller belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Positional function arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// `0` waits for the commit, `1` returns after submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_flag: Option<i64>,
}

/// Request for `Query`: read chaincode state without committing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaincode_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<PeerSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}

/// Request for `GetInvokeTx`: look up the outcome of a submitted transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetInvokeTxRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_name: Option<String>,

    /// Organization the peer belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_group: Option<String>,

    /// Transaction id returned by `Invoke`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}
