use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::services::rate_limit::RequestGate;
use crate::services::Analyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Post,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub x: &'static str,
    pub y: u32,
}

/// Placeholder engagement counters. These are drawn at random and do not
/// reflect the real content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticMetrics {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

/// Fields that only exist for a given content type. `hashtags` is `None`
/// when the reply has no hashtag section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDetails {
    Video { hashtags: Option<Vec<String>>, views: u32 },
    Post,
    Unknown,
}

impl ContentDetails {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentDetails::Video { .. } => ContentType::Video,
            ContentDetails::Post => ContentType::Post,
            ContentDetails::Unknown => ContentType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub engagement_score: u32,
    pub virality_score: u32,
    pub trend_data: Vec<TrendPoint>,
    pub insights: Vec<String>,
    pub related_communities: Vec<String>,
    pub metrics: SyntheticMetrics,
    pub details: ContentDetails,
    pub embed_url: Option<String>,
}

impl AnalysisResult {
    pub fn content_type(&self) -> ContentType {
        self.details.content_type()
    }

    pub fn hashtags(&self) -> Option<&[String]> {
        match &self.details {
            ContentDetails::Video { hashtags, .. } => hashtags.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct MetricsPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub content_type: ContentType,
    pub engagement_score: u32,
    pub virality_score: u32,
    pub trend_data: Vec<TrendPoint>,
    pub insights: Vec<String>,
    pub related_communities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    pub metrics: MetricsPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

impl From<AnalysisResult> for AnalysisPayload {
    fn from(result: AnalysisResult) -> Self {
        let content_type = result.content_type();
        let (hashtags, views) = match result.details {
            ContentDetails::Video { hashtags, views } => (hashtags, Some(views)),
            ContentDetails::Post | ContentDetails::Unknown => (None, None),
        };

        Self {
            content_type,
            engagement_score: result.engagement_score,
            virality_score: result.virality_score,
            trend_data: result.trend_data,
            insights: result.insights,
            related_communities: result.related_communities,
            hashtags,
            metrics: MetricsPayload {
                views,
                likes: result.metrics.likes,
                comments: result.metrics.comments,
                shares: result.metrics.shares,
            },
            embed_url: result.embed_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub struct AppState {
    pub gate: RequestGate,
    pub analyzer: Analyzer,
    pub credentials: Credentials,
}

impl AppState {
    pub fn new(gate: RequestGate, analyzer: Analyzer, credentials: Credentials) -> Self {
        Self {
            gate,
            analyzer,
            credentials,
        }
    }
}
