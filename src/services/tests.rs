#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::config::ProviderSettings;
    use crate::errors::AnalyzerError;
    use crate::models::{ContentDetails, ContentType};
    use crate::services::provider::{ChatRequest, CompletionProvider};
    use crate::services::Analyzer;

    struct ScriptedProvider {
        reply: fn() -> Result<Option<String>, AnalyzerError>,
        delay: Duration,
        seen: Mutex<Vec<(String, ChatRequest)>>,
    }

    impl ScriptedProvider {
        fn new(reply: fn() -> Result<Option<String>, AnalyzerError>) -> Arc<Self> {
            Arc::new(Self { reply, delay: Duration::ZERO, seen: Mutex::new(Vec::new()) })
        }

        fn slow(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                reply: || Ok(Some("Engagement Score: 1".to_string())),
                delay,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(
            &self,
            api_key: &str,
            request: &ChatRequest,
        ) -> Result<Option<String>, AnalyzerError> {
            self.seen.lock().unwrap().push((api_key.to_string(), request.clone()));
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            (self.reply)()
        }
    }

    fn video_reply() -> Result<Option<String>, AnalyzerError> {
        Ok(Some(
            "Engagement Score: 91\nVirality Score: 67\n\nKey Insights:\n- Great pacing\n\nRelated Communities:\n- r/music - fans\n\nRecommended Hashtags:\n- #live\n"
                .to_string(),
        ))
    }

    #[tokio::test]
    async fn test_video_analysis() {
        let provider = ScriptedProvider::new(video_reply);
        let analyzer = Analyzer::new(provider.clone(), ProviderSettings::default());

        let result = analyzer
            .analyze("pplx-key", "https://www.youtube.com/watch?v=abc123")
            .await
            .unwrap();

        assert_eq!(result.engagement_score, 91);
        assert_eq!(result.virality_score, 67);
        assert_eq!(result.content_type(), ContentType::Video);
        assert_eq!(result.related_communities, vec!["r/music"]);
        assert_eq!(result.hashtags(), Some(&["#live".to_string()][..]));
        assert_eq!(result.embed_url.as_deref(), Some("https://www.youtube.com/embed/abc123"));

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (key, request) = &seen[0];
        assert_eq!(key, "pplx-key");
        assert!(request.messages[0].content.contains("Recommended Hashtags:"));
        assert_eq!(
            request.messages[1].content,
            "Analyze this content: https://www.youtube.com/watch?v=abc123"
        );
    }

    #[tokio::test]
    async fn test_post_analysis_has_no_video_fields() {
        let provider = ScriptedProvider::new(video_reply);
        let analyzer = Analyzer::new(provider, ProviderSettings::default());

        let result = analyzer.analyze("k", "https://reddit.com/r/foo").await.unwrap();

        assert_eq!(result.details, ContentDetails::Post);
        assert_eq!(result.hashtags(), None);
        assert_eq!(result.embed_url, None);
    }

    #[tokio::test]
    async fn test_empty_reply_is_no_analysis() {
        let provider = ScriptedProvider::new(|| Ok(None));
        let analyzer = Analyzer::new(provider, ProviderSettings::default());

        let err = analyzer.analyze("k", "https://example.com").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::NoAnalysis));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate_without_retry() {
        let provider = ScriptedProvider::new(|| Err(AnalyzerError::UpstreamRateLimited));
        let analyzer = Analyzer::new(provider.clone(), ProviderSettings::default());

        let err = analyzer.analyze("k", "https://example.com").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::UpstreamRateLimited));
        assert_eq!(provider.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_call_times_out() {
        let settings = ProviderSettings {
            timeout: Duration::from_millis(50),
            ..ProviderSettings::default()
        };
        let analyzer = Analyzer::new(ScriptedProvider::slow(Duration::from_secs(5)), settings);

        let err = analyzer.analyze("k", "https://example.com").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Timeout));
    }
}
