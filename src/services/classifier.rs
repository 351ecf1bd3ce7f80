use lazy_static::lazy_static;
use url::Url;

use crate::models::ContentType;

lazy_static! {
    pub static ref VIDEO_PLATFORMS: Vec<&'static str> = vec!["youtube.com", "vimeo.com", "tiktok.com"];
    pub static ref POST_PLATFORMS: Vec<&'static str> =
        vec!["reddit.com", "threads.net", "twitter.com", "x.com"];
}

fn domain_of(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_ascii_lowercase();
    Some(match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    })
}

pub fn classify(url: &str) -> ContentType {
    let domain = match Url::parse(url).ok().as_ref().and_then(domain_of) {
        Some(domain) => domain,
        None => return ContentType::Unknown,
    };

    if VIDEO_PLATFORMS.iter().any(|p| domain.contains(p)) {
        ContentType::Video
    } else if POST_PLATFORMS.iter().any(|p| domain.contains(p)) {
        ContentType::Post
    } else {
        ContentType::Unknown
    }
}

pub fn derive_embed_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let domain = domain_of(&parsed)?;

    if domain.contains("youtube.com") {
        let video_id = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty())?;
        return Some(format!("https://www.youtube.com/embed/{}", video_id));
    }

    if domain.contains("vimeo.com") {
        let video_id = parsed.path().split('/').nth(1).filter(|id| !id.is_empty())?;
        return Some(format!("https://player.vimeo.com/video/{}", video_id));
    }

    if domain.contains("tiktok.com") {
        let video_id = parsed.path().split('/').last().filter(|id| !id.is_empty())?;
        return Some(format!("https://www.tiktok.com/embed/{}", video_id));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_domain() {
        assert_eq!(classify("https://www.youtube.com/watch?v=abc123"), ContentType::Video);
        assert_eq!(classify("https://vimeo.com/76979871"), ContentType::Video);
        assert_eq!(classify("https://www.tiktok.com/@user/video/123"), ContentType::Video);
        assert_eq!(classify("https://reddit.com/r/foo"), ContentType::Post);
        assert_eq!(classify("https://www.threads.net/@user/post/1"), ContentType::Post);
        assert_eq!(classify("https://x.com/user/status/1"), ContentType::Post);
        assert_eq!(classify("https://example.com"), ContentType::Unknown);
    }

    #[test]
    fn subdomains_match() {
        assert_eq!(classify("https://m.youtube.com/watch?v=abc"), ContentType::Video);
        assert_eq!(classify("https://old.reddit.com/r/rust"), ContentType::Post);
    }

    #[test]
    fn malformed_urls_are_unknown() {
        assert_eq!(classify("not a url"), ContentType::Unknown);
        assert_eq!(classify(""), ContentType::Unknown);
        assert_eq!(classify("mailto:someone@youtube.com"), ContentType::Unknown);
    }

    #[test]
    fn youtube_embed() {
        assert_eq!(
            derive_embed_url("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
        assert_eq!(
            derive_embed_url("https://youtube.com/watch?list=PL1&v=xyz").as_deref(),
            Some("https://www.youtube.com/embed/xyz")
        );
        assert_eq!(derive_embed_url("https://youtube.com/watch"), None);
        assert_eq!(derive_embed_url("https://youtube.com/watch?v="), None);
    }

    #[test]
    fn vimeo_embed_uses_first_segment() {
        assert_eq!(
            derive_embed_url("https://vimeo.com/76979871/extra").as_deref(),
            Some("https://player.vimeo.com/video/76979871")
        );
        assert_eq!(derive_embed_url("https://vimeo.com/"), None);
    }

    #[test]
    fn tiktok_embed_uses_last_segment() {
        assert_eq!(
            derive_embed_url("https://www.tiktok.com/@someone/video/7234567890").as_deref(),
            Some("https://www.tiktok.com/embed/7234567890")
        );
        assert_eq!(derive_embed_url("https://www.tiktok.com/@someone/video/"), None);
    }

    #[test]
    fn other_hosts_have_no_embed() {
        assert_eq!(derive_embed_url("https://reddit.com/r/foo"), None);
        assert_eq!(derive_embed_url("not a url"), None);
    }
}
