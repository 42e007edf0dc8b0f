//! Tests against the real Tencent Cloud API.
//!
//! They need `TENCENTCLOUD_SECRET_ID` and `TENCENTCLOUD_SECRET_KEY`, and
//! honour the other `TENCENTCLOUD_*` profile variables.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tencentcloud_sdk::iai::{GetGroupListRequest, IaiClient};
    use tencentcloud_sdk::tmt::{LanguageDetectRequest, TextTranslateRequest, TmtClient};
    use tencentcloud_sdk::{ClientProfile, EnvCredentialProvider};

    fn region() -> String {
        std::env::var("TENCENTCLOUD_REGION").unwrap_or_else(|_| "ap-guangzhou".to_owned())
    }

    #[tokio::test]
    #[ignore = "requires Tencent Cloud credentials"]
    async fn test_should_translate_text_live() -> anyhow::Result<()> {
        crate::init_tracing();
        let client = TmtClient::with_provider(
            Arc::new(EnvCredentialProvider),
            region(),
            ClientProfile::from_env()?,
        )?;

        let response = client
            .text_translate(&TextTranslateRequest {
                source_text: Some("你好".to_owned()),
                source: Some("zh".to_owned()),
                target: Some("en".to_owned()),
                project_id: Some(0),
                ..Default::default()
            })
            .await?;

        assert!(response.target_text.is_some());
        assert!(!response.request_id.is_empty());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Tencent Cloud credentials"]
    async fn test_should_detect_language_live() -> anyhow::Result<()> {
        crate::init_tracing();
        let client = TmtClient::with_provider(
            Arc::new(EnvCredentialProvider),
            region(),
            ClientProfile::from_env()?,
        )?;

        let response = client
            .language_detect(&LanguageDetectRequest {
                text: Some("Bonjour tout le monde".to_owned()),
                project_id: Some(0),
            })
            .await?;

        assert_eq!(response.lang.as_deref(), Some("fr"));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Tencent Cloud credentials"]
    async fn test_should_list_face_groups_live() -> anyhow::Result<()> {
        crate::init_tracing();
        let client = IaiClient::with_provider(
            Arc::new(EnvCredentialProvider),
            region(),
            ClientProfile::from_env()?,
        )?;

        let response = client
            .get_group_list(&GetGroupListRequest {
                offset: Some(0),
                limit: Some(10),
            })
            .await?;

        assert!(response.group_num.is_some());
        Ok(())
    }
}
