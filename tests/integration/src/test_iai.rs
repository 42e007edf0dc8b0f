//! IAI client tests against the local server.

#[cfg(test)]
mod tests {
    use futures::future::join_all;
    use serde_json::json;
    use tencentcloud_sdk::SdkError;
    use tencentcloud_sdk::iai::{
        CreatePersonRequest, DetectFaceRequest, GetPersonListNumRequest, IaiClient,
        PersonExDescriptionInfo, SearchFacesRequest,
    };

    use crate::{MockServer, Reply, test_credentials};

    fn client(server: &MockServer) -> IaiClient {
        IaiClient::with_provider(test_credentials(), "ap-guangzhou", server.profile()).unwrap()
    }

    #[tokio::test]
    async fn test_should_detect_face_end_to_end() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "DetectFace",
            Reply::Payload(json!({
                "ImageWidth": 640,
                "ImageHeight": 480,
                "FaceInfos": [{
                    "X": 120, "Y": 80, "Width": 200, "Height": 240,
                    "FaceAttributesInfo": { "Gender": 90, "Age": 31, "Hat": false }
                }],
                "FaceModelVersion": "3.0"
            })),
        );

        let response = client(&server)
            .detect_face(&DetectFaceRequest {
                url: Some("https://img.example/face.jpg".to_owned()),
                need_face_attributes: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.image_width, Some(640));
        let face = &response.face_infos.unwrap()[0];
        let attributes = face.face_attributes_info.as_ref().unwrap();
        assert_eq!(attributes.age, Some(31));
        assert_eq!(attributes.hat, Some(false));
        assert!(!response.request_id.is_empty());

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].tc3);
        assert_eq!(requests[0].action, "DetectFace");
        assert_eq!(requests[0].version, "2018-03-01");
        assert_eq!(requests[0].region.as_deref(), Some("ap-guangzhou"));
        assert_eq!(
            requests[0].params,
            json!({ "Url": "https://img.example/face.jpg", "NeedFaceAttributes": 1 })
        );
    }

    #[tokio::test]
    async fn test_should_send_nested_request_fields() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "CreatePerson",
            Reply::Payload(json!({
                "FaceId": "f-1",
                "FaceRect": { "X": 1, "Y": 2, "Width": 3, "Height": 4 },
                "RequestId": "fixed-id"
            })),
        );

        let response = client(&server)
            .create_person(&CreatePersonRequest {
                group_id: Some("g-1".to_owned()),
                person_name: Some("Alice".to_owned()),
                person_id: Some("p-1".to_owned()),
                person_ex_description_infos: Some(vec![PersonExDescriptionInfo {
                    person_ex_description_index: Some(0),
                    person_ex_description: Some("engineering".to_owned()),
                }]),
                image: Some("aGVsbG8=".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.face_id.as_deref(), Some("f-1"));
        assert_eq!(response.face_rect.unwrap().width, Some(3));
        assert_eq!(response.request_id, "fixed-id");

        let params = &server.requests()[0].params;
        assert_eq!(
            params["PersonExDescriptionInfos"][0]["PersonExDescription"],
            "engineering"
        );
        assert!(params.get("Gender").is_none());
    }

    #[tokio::test]
    async fn test_should_surface_remote_business_error() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "SearchFaces",
            Reply::error("InvalidParameterValue.GroupIdNotExist", "group does not exist"),
        );

        let err = client(&server)
            .search_faces(&SearchFacesRequest {
                group_ids: Some(vec!["missing".to_owned()]),
                url: Some("https://img.example/face.jpg".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        match err {
            SdkError::Api(err) => {
                assert_eq!(err.code, "InvalidParameterValue.GroupIdNotExist");
                assert_eq!(err.message, "group does not exist");
                assert!(!err.request_id.is_empty());
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_report_unregistered_action() {
        let server = MockServer::start().await.unwrap();

        let err = client(&server)
            .get_person_list_num(&GetPersonListNumRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some("InvalidAction"));
    }

    #[tokio::test]
    async fn test_should_serve_concurrent_calls_from_one_client() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "GetPersonListNum",
            Reply::Payload(json!({ "PersonNum": 3, "FaceNum": 7 })),
        );
        let client = client(&server);

        let calls = (0..16).map(|i| {
            let client = client.clone();
            async move {
                client
                    .get_person_list_num(&GetPersonListNumRequest {
                        group_id: Some(format!("g-{i}")),
                    })
                    .await
            }
        });
        let results = join_all(calls).await;

        let mut request_ids = Vec::new();
        for result in results {
            let response = result.unwrap();
            assert_eq!(response.person_num, Some(3));
            request_ids.push(response.request_id);
        }
        request_ids.sort();
        request_ids.dedup();
        assert_eq!(request_ids.len(), 16);
        assert_eq!(server.requests().len(), 16);
    }
}
