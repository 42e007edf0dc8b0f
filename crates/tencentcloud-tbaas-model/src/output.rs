//! TBaaS response types.

use serde::{Deserialize, Serialize};
use tencentcloud_codec::impl_unflatten;

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Response of `Invoke`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvokeResponse {
    /// Transaction id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,

    /// Chaincode events emitted while executing the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<String>,

    pub request_id: String,
}

/// Response of `Query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResponse {
    /// One result per endorsing peer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,

    pub request_id: String,
}

/// Response of `GetInvokeTx`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetInvokeTxResponse {
    /// Validation code; `0` means the transaction is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_validation_code: Option<i64>,

    /// Validation message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_validation_msg: Option<String>,

    pub request_id: String,
}

impl_unflatten! {
    InvokeResponse {
        txid: "Txid" => field,
        events: "Events" => field,
        request_id: "RequestId" => required,
    }
    QueryResponse {
        data: "Data" => field,
        request_id: "RequestId" => required,
    }
    GetInvokeTxResponse {
        tx_validation_code: "TxValidationCode" => field,
        tx_validation_msg: "TxValidationMsg" => field,
        request_id: "RequestId" => required,
    }
}

#[cfg(test)]
mod tests {
    use tencentcloud_codec::decode_response;

    use super::*;

    #[test]
    fn test_should_decode_invoke_tx_result() {
        let response: GetInvokeTxResponse = decode_response(
            br#"{"Response":{"TxValidationCode":0,"TxValidationMsg":"VALID","RequestId":"r-1"}}"#,
        )
        .unwrap();
        assert_eq!(response.tx_validation_code, Some(0));
        assert_eq!(response.tx_validation_msg.as_deref(), Some("VALID"));
        assert_eq!(response.request_id, "r-1");
    }

    #[test]
    fn test_should_decode_query_data_list() {
        let response: QueryResponse =
            decode_response(br#"{"Response":{"Data":["100","100"],"RequestId":"r-2"}}"#).unwrap();
        assert_eq!(
            response.data,
            Some(vec!["100".to_owned(), "100".to_owned()])
        );
    }

    #[test]
    fn test_should_surface_remote_error() {
        let err = decode_response::<InvokeResponse>(
            br#"{"Response":{"Error":{"Code":"ResourceNotFound","Message":"no such cluster"},"RequestId":"r-3"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.api_code(), Some("ResourceNotFound"));
    }
}
