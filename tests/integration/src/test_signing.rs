//! Signature scheme tests: every request is verified by the local server.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use serde_json::json;
    use tencentcloud_sdk::tmt::{TextTranslateRequest, TmtClient};
    use tencentcloud_sdk::{
        ClientProfile, Credential, CredentialError, CredentialProvider, HttpMethod, Language,
        SignMethod,
    };

    use crate::{MockServer, Reply, SECRET_ID, SECRET_KEY, credentials, test_credentials};

    fn request() -> TextTranslateRequest {
        TextTranslateRequest {
            source_text: Some("早上好 & 晚安".to_owned()),
            source: Some("zh".to_owned()),
            target: Some("en".to_owned()),
            project_id: Some(0),
            ..Default::default()
        }
    }

    async fn server() -> MockServer {
        let server = MockServer::start().await.unwrap();
        server.reply(
            "TextTranslate",
            Reply::Payload(json!({ "TargetText": "Good morning & good night" })),
        );
        server
    }

    fn with(server: &MockServer, sign_method: SignMethod, method: HttpMethod) -> ClientProfile {
        let mut profile = server.profile();
        profile.sign_method = sign_method;
        profile.http.method = method;
        profile
    }

    #[tokio::test]
    async fn test_should_accept_every_sign_method_and_http_method() {
        let server = server().await;

        for sign_method in [
            SignMethod::Tc3HmacSha256,
            SignMethod::HmacSha256,
            SignMethod::HmacSha1,
        ] {
            for method in [HttpMethod::Post, HttpMethod::Get] {
                let client = TmtClient::with_provider(
                    test_credentials(),
                    "ap-guangzhou",
                    with(&server, sign_method, method),
                )
                .unwrap();

                let response = client
                    .text_translate(&request())
                    .await
                    .unwrap_or_else(|e| panic!("{sign_method} {}: {e}", method.as_str()));
                assert_eq!(
                    response.target_text.as_deref(),
                    Some("Good morning & good night")
                );
            }
        }

        let requests = server.requests();
        assert_eq!(requests.len(), 6);
        for recorded in &requests {
            assert_eq!(recorded.action, "TextTranslate");
            assert_eq!(recorded.version, "2018-03-21");
            assert_eq!(recorded.params["SourceText"], "早上好 & 晚安");
        }
        assert_eq!(requests.iter().filter(|r| r.tc3).count(), 2);
    }

    #[tokio::test]
    async fn test_should_reject_wrong_secret_key() {
        let server = server().await;

        for sign_method in [SignMethod::Tc3HmacSha256, SignMethod::HmacSha256] {
            let client = TmtClient::with_provider(
                credentials(SECRET_ID, "not-the-secret"),
                "ap-guangzhou",
                with(&server, sign_method, HttpMethod::Post),
            )
            .unwrap();

            let err = client.text_translate(&request()).await.unwrap_err();
            assert_eq!(err.api_code(), Some("AuthFailure.SignatureFailure"));
        }
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_secret_id() {
        let server = server().await;
        let client = TmtClient::with_provider(
            credentials("AKIDunknown", "whatever"),
            "ap-guangzhou",
            server.profile(),
        )
        .unwrap();

        let err = client.text_translate(&request()).await.unwrap_err();
        assert_eq!(err.api_code(), Some("AuthFailure.SecretIdNotFound"));
    }

    /// Hands out the accepted credential once, then one the server rejects.
    #[derive(Debug, Default)]
    struct RevokedAfterFirstUse {
        used: AtomicBool,
    }

    impl CredentialProvider for RevokedAfterFirstUse {
        fn credential(&self) -> Result<Credential, CredentialError> {
            if self.used.swap(true, Ordering::SeqCst) {
                Ok(Credential::new("AKIDrevoked", "revoked"))
            } else {
                Ok(Credential::new(SECRET_ID, SECRET_KEY))
            }
        }
    }

    #[tokio::test]
    async fn test_should_keep_signing_with_credential_from_construction() {
        let server = server().await;
        let provider = Arc::new(RevokedAfterFirstUse::default());
        let client = TmtClient::with_provider(
            Arc::clone(&provider) as Arc<dyn CredentialProvider>,
            "ap-guangzhou",
            server.profile(),
        )
        .unwrap();

        for _ in 0..3 {
            client.text_translate(&request()).await.unwrap();
        }

        assert_eq!(server.requests().len(), 3);
        assert_eq!(
            provider.credential().unwrap().secret_id,
            "AKIDrevoked",
            "provider moved on, client did not"
        );
    }

    #[tokio::test]
    async fn test_should_sign_language_and_regionless_calls() {
        let server = server().await;
        let mut profile = server.profile();
        profile.language = Some(Language::EnUs);
        let client = TmtClient::with_provider(test_credentials(), "", profile).unwrap();

        client.text_translate(&request()).await.unwrap();

        let recorded = &server.requests()[0];
        assert!(recorded.tc3);
        assert_eq!(recorded.region, None);
    }
}
