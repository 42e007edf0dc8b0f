//! TMT client tests against the local server.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tencentcloud_sdk::tmt::{
        LanguageDetectRequest, SpeechTranslateRequest, SpeechTranslateResponse,
        TextTranslateRequest, TmtClient,
    };
    use tencentcloud_sdk::{SdkError, TransportErrorKind};

    use crate::{MockServer, Reply, test_credentials};

    #[tokio::test]
    async fn test_should_translate_speech_fragment() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "SpeechTranslate",
            Reply::Payload(json!({ "RequestId": "r-1" })),
        );
        let client =
            TmtClient::with_provider(test_credentials(), "ap-guangzhou", server.profile()).unwrap();

        let response = client
            .speech_translate(&SpeechTranslateRequest {
                source: Some("zh".to_owned()),
                target: Some("en".to_owned()),
                seq: Some(0),
                is_end: Some(1),
                data: Some("UklGRg==".to_owned()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            response,
            SpeechTranslateResponse {
                request_id: "r-1".to_owned(),
                ..Default::default()
            }
        );
        assert_eq!(
            server.requests()[0].params,
            json!({ "Source": "zh", "Target": "en", "Seq": 0, "IsEnd": 1, "Data": "UklGRg==" })
        );
    }

    #[tokio::test]
    async fn test_should_translate_text_with_session_token() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "TextTranslate",
            Reply::Payload(json!({ "TargetText": "Hello", "Source": "zh", "Target": "en" })),
        );
        let credential = tencentcloud_sdk::Credential::new(crate::SECRET_ID, crate::SECRET_KEY)
            .with_token("session-token");
        let client =
            TmtClient::with_profile(credential, "ap-guangzhou", server.profile()).unwrap();

        let response = client
            .text_translate(&TextTranslateRequest {
                source_text: Some("你好".to_owned()),
                source: Some("zh".to_owned()),
                target: Some("en".to_owned()),
                project_id: Some(0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.target_text.as_deref(), Some("Hello"));
        assert_eq!(server.requests()[0].params["SourceText"], "你好");
    }

    #[tokio::test]
    async fn test_should_fail_decode_on_gateway_error_page() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "LanguageDetect",
            Reply::Raw {
                status: http::StatusCode::BAD_GATEWAY,
                body: "<html>bad gateway</html>".to_owned(),
            },
        );
        let client =
            TmtClient::with_provider(test_credentials(), "ap-guangzhou", server.profile()).unwrap();

        let err = client
            .language_detect(&LanguageDetectRequest {
                text: Some("hello".to_owned()),
                project_id: Some(0),
            })
            .await
            .unwrap_err();

        match err {
            SdkError::Decode(err) => {
                assert_eq!(err.path, "<body>");
                assert!(err.message.contains("502"), "{}", err.message);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_fail_decode_on_mistyped_payload() {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "SpeechTranslate",
            Reply::Payload(json!({ "Seq": "first" })),
        );
        let client =
            TmtClient::with_provider(test_credentials(), "ap-guangzhou", server.profile()).unwrap();

        let err = client
            .speech_translate(&SpeechTranslateRequest::default())
            .await
            .unwrap_err();

        match err {
            SdkError::Decode(err) => assert_eq!(err.path, "Response.Seq"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_report_transport_error_when_server_is_gone() {
        let server = MockServer::start().await.unwrap();
        let profile = server.profile();
        let addr = server.addr();
        drop(server);
        // Wait for the aborted accept loop to release the listener.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let client = TmtClient::with_provider(test_credentials(), "ap-guangzhou", profile).unwrap();
        let err = client
            .text_translate(&TextTranslateRequest::default())
            .await
            .unwrap_err();

        match err {
            SdkError::Transport(err) => {
                assert_ne!(err.kind, TransportErrorKind::Timeout, "{addr}: {err}");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
