use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::models::{AnalysisResult, ContentDetails, ContentType};
use crate::services::prompt::{COMMUNITIES_HEADING, HASHTAGS_HEADING};
use crate::services::synthetic;

pub const DEFAULT_ENGAGEMENT_SCORE: u32 = 75;
pub const DEFAULT_VIRALITY_SCORE: u32 = 80;
pub const PLACEHOLDER_INSIGHT: &str = "Analyzing content patterns...";

lazy_static! {
    static ref ENGAGEMENT_RE: Regex = Regex::new(r"(?i)Engagement Score:\s*(\d+)").unwrap();
    static ref VIRALITY_RE: Regex = Regex::new(r"(?i)Virality Score:\s*(\d+)").unwrap();
}

pub fn extract(raw: &str, content_type: ContentType) -> AnalysisResult {
    extract_with_rng(raw, content_type, &mut rand::thread_rng())
}

pub fn extract_with_rng<R: Rng + ?Sized>(
    raw: &str,
    content_type: ContentType,
    rng: &mut R,
) -> AnalysisResult {
    let details = match content_type {
        ContentType::Video => ContentDetails::Video {
            hashtags: hashtags(raw),
            views: synthetic::video_views(rng),
        },
        ContentType::Post => ContentDetails::Post,
        ContentType::Unknown => ContentDetails::Unknown,
    };

    AnalysisResult {
        engagement_score: score(&ENGAGEMENT_RE, raw).unwrap_or(DEFAULT_ENGAGEMENT_SCORE),
        virality_score: score(&VIRALITY_RE, raw).unwrap_or(DEFAULT_VIRALITY_SCORE),
        trend_data: synthetic::trend_series(rng),
        insights: insights(raw),
        related_communities: related_communities(raw).unwrap_or_default(),
        metrics: synthetic::engagement_metrics(rng),
        details,
        embed_url: None,
    }
}

// not clamped to 0-100
fn score(re: &Regex, raw: &str) -> Option<u32> {
    re.captures(raw)?.get(1)?.as_str().parse().ok()
}

fn bullet(line: &str) -> Option<&str> {
    line.trim().strip_prefix('-').map(str::trim_start)
}

pub fn insights(raw: &str) -> Vec<String> {
    let found: Vec<String> = raw.lines().filter_map(bullet).map(String::from).collect();
    if found.is_empty() {
        vec![PLACEHOLDER_INSIGHT.to_string()]
    } else {
        found
    }
}

/// Bullets in the text after `heading`, cut short at `until` when it follows.
fn section_bullets<'a>(raw: &'a str, heading: &str, until: Option<&str>) -> Option<Vec<&'a str>> {
    let (_, mut rest) = raw.split_once(heading)?;
    if let Some((section, _)) = until.and_then(|end| rest.split_once(end)) {
        rest = section;
    }
    Some(rest.lines().filter_map(bullet).collect())
}

/// Community names with any trailing ` - reason` removed. The hashtag list
/// requested after the communities is not part of them.
pub fn related_communities(raw: &str) -> Option<Vec<String>> {
    let bullets = section_bullets(raw, COMMUNITIES_HEADING, Some(HASHTAGS_HEADING))?;
    Some(
        bullets
            .into_iter()
            .map(|entry| match entry.split_once(" - ") {
                Some((name, _)) => name.to_string(),
                None => entry.to_string(),
            })
            .collect(),
    )
}

pub fn hashtags(raw: &str) -> Option<Vec<String>> {
    let bullets = section_bullets(raw, HASHTAGS_HEADING, None)?;
    Some(bullets.into_iter().map(String::from).collect())
}
