//! Blockchain (TBaaS) client.

pub use tencentcloud_tbaas_model::input::*;
pub use tencentcloud_tbaas_model::output::*;
pub use tencentcloud_tbaas_model::types::*;
pub use tencentcloud_tbaas_model::{API_VERSION, DESCRIPTOR, SERVICE, TbaasOperation};

use crate::macros::service_client;

service_client! {
    /// Client for the TBaaS `2018-04-16` API.
    TbaasClient {
        descriptor: DESCRIPTOR,
        operation: TbaasOperation,
    }

    /// Submit a transaction to a chaincode.
    invoke => Invoke(InvokeRequest) -> InvokeResponse;
    /// Query chaincode state without committing a transaction.
    query => Query(QueryRequest) -> QueryResponse;
    /// Look up the validation result of a submitted transaction.
    get_invoke_tx => GetInvokeTx(GetInvokeTxRequest) -> GetInvokeTxResponse;
}
