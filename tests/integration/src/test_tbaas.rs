//! TBaaS client tests against the local server.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tencentcloud_sdk::tbaas::{
        GetInvokeTxRequest, InvokeRequest, PeerSet, QueryRequest, TbaasClient,
    };
    use tencentcloud_sdk::{HttpMethod, SignMethod};

    use crate::{MockServer, Reply, test_credentials};

    fn peers() -> Vec<PeerSet> {
        vec![
            PeerSet {
                peer_name: Some("peer0.org1".to_owned()),
                org_name: Some("org1".to_owned()),
            },
            PeerSet {
                peer_name: Some("peer0.org2".to_owned()),
                org_name: Some("org2".to_owned()),
            },
        ]
    }

    #[tokio::test]
    async fn test_should_invoke_and_look_up_transaction() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "Invoke",
            Reply::Payload(json!({ "Txid": "tx-42", "Events": "" })),
        );
        server.reply(
            "GetInvokeTx",
            Reply::Payload(json!({ "TxValidationCode": 0, "TxValidationMsg": "VALID" })),
        );
        let client =
            TbaasClient::with_provider(test_credentials(), "ap-beijing", server.profile()).unwrap();

        let invoked = client
            .invoke(&InvokeRequest {
                module: Some("transaction".to_owned()),
                operation: Some("invoke".to_owned()),
                cluster_id: Some("bcs-1".to_owned()),
                chaincode_name: Some("asset".to_owned()),
                channel_name: Some("main".to_owned()),
                peers: Some(peers()),
                func_name: Some("transfer".to_owned()),
                group_name: Some("org1".to_owned()),
                args: Some(vec!["a".to_owned(), "b".to_owned(), "10".to_owned()]),
                async_flag: Some(0),
            })
            .await
            .unwrap();
        assert_eq!(invoked.txid.as_deref(), Some("tx-42"));

        let tx = client
            .get_invoke_tx(&GetInvokeTxRequest {
                module: Some("transaction".to_owned()),
                operation: Some("query_txid".to_owned()),
                cluster_id: Some("bcs-1".to_owned()),
                channel_name: Some("main".to_owned()),
                tx_id: invoked.txid.clone(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(tx.tx_validation_code, Some(0));
        assert_eq!(tx.tx_validation_msg.as_deref(), Some("VALID"));

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].params["Peers"][1]["OrgName"], "org2");
        assert_eq!(requests[1].params["TxId"], "tx-42");
        assert!(requests.iter().all(|r| r.version == "2018-04-16"));
    }

    #[tokio::test]
    async fn test_should_query_over_legacy_get() {
        let server = MockServer::start().await.unwrap();
        server.reply("Query", Reply::Payload(json!({ "Data": ["100", "100"] })));

        let mut profile = server.profile();
        profile.sign_method = SignMethod::HmacSha1;
        profile.http.method = HttpMethod::Get;
        let client = TbaasClient::with_provider(test_credentials(), "ap-beijing", profile).unwrap();

        let response = client
            .query(&QueryRequest {
                cluster_id: Some("bcs-1".to_owned()),
                peers: Some(peers()),
                func_name: Some("balance".to_owned()),
                args: Some(vec!["a".to_owned()]),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(
            response.data,
            Some(vec!["100".to_owned(), "100".to_owned()])
        );

        let request = &server.requests()[0];
        assert!(!request.tc3);
        assert_eq!(request.method, http::Method::GET);
        assert_eq!(request.action, "Query");
        assert_eq!(request.region.as_deref(), Some("ap-beijing"));
        assert_eq!(request.params["Peers"][0]["PeerName"], "peer0.org1");
        assert_eq!(request.params["Args"][0], "a");
        assert_eq!(request.params["SignatureMethod"], "HmacSHA1");
    }
}
