pub mod classifier;
pub mod extract;
pub mod prompt;
pub mod provider;
pub mod rate_limit;
pub mod synthetic;

use std::sync::Arc;
use std::time::Instant;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::config::ProviderSettings;
use crate::errors::AnalyzerError;
use crate::models::AnalysisResult;
use provider::{ChatRequest, CompletionProvider};

#[cfg(test)]
mod tests;

pub struct Analyzer {
    provider: Arc<dyn CompletionProvider>,
    settings: ProviderSettings,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: ProviderSettings) -> Self {
        Self { provider, settings }
    }

    pub async fn analyze(&self, api_key: &str, url: &str) -> Result<AnalysisResult, AnalyzerError> {
        let start = Instant::now();
        let content_type = classifier::classify(url);

        let request = ChatRequest::new(
            &self.settings,
            prompt::build_prompt(content_type),
            prompt::user_message(url),
        );

        let text = match timeout(self.settings.timeout, self.provider.complete(api_key, &request)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(url, timeout_secs = self.settings.timeout.as_secs(), "provider call timed out");
                return Err(AnalyzerError::Timeout);
            }
        };
        let text = text.ok_or(AnalyzerError::NoAnalysis)?;

        let mut result = extract::extract(&text, content_type);
        result.embed_url = classifier::derive_embed_url(url);

        info!(
            url,
            content_type = ?content_type,
            engagement = result.engagement_score,
            virality = result.virality_score,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "analysis complete"
        );
        Ok(result)
    }
}
