use crate::models::ContentType;

pub const COMMUNITIES_HEADING: &str = "Related Communities:";
pub const HASHTAGS_HEADING: &str = "Recommended Hashtags:";

const BASE_PROMPT: &str = "You are an expert content analyst. Analyze the URL for video/content potential and provide a detailed analysis in the following format:

Engagement Score: [score 1-100]
Virality Score: [score 1-100]

Key Insights:
- [insight about content quality]
- [insight about audience engagement]
- [insight about viral potential]
- [insight about SEO optimization]
- [insight about call-to-action effectiveness]

Related Communities:
- [community 1] - [reason for relevance]
- [community 2] - [reason for relevance]
- [community 3] - [reason for relevance]";

const VIDEO_PROMPT: &str = "

Recommended Hashtags:
- [hashtag 1]
- [hashtag 2]
- [hashtag 3]
- [hashtag 4]
- [hashtag 5]

Video Metrics:
Comment on expected watch time, retention and how the thumbnail and title affect click-through.";

const POST_PROMPT: &str = "

Discussion Points:
Summarize the main discussion points the post is likely to raise.

Post Engagement:
Comment on expected replies, shares and how the opening line affects reach.";

pub fn build_prompt(content_type: ContentType) -> String {
    let extra = match content_type {
        ContentType::Video => VIDEO_PROMPT,
        ContentType::Post => POST_PROMPT,
        ContentType::Unknown => "",
    };
    format!("{}{}", BASE_PROMPT, extra)
}

pub fn user_message(url: &str) -> String {
    format!("Analyze this content: {}", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_block_is_always_present() {
        for ct in [ContentType::Video, ContentType::Post, ContentType::Unknown] {
            let prompt = build_prompt(ct);
            assert!(prompt.contains("Engagement Score:"));
            assert!(prompt.contains("Virality Score:"));
            assert!(prompt.contains("Key Insights:"));
            assert!(prompt.contains(COMMUNITIES_HEADING));
        }
    }

    #[test]
    fn type_specific_blocks() {
        let video = build_prompt(ContentType::Video);
        assert!(video.contains(HASHTAGS_HEADING));
        assert!(!video.contains("Discussion Points:"));

        let post = build_prompt(ContentType::Post);
        assert!(post.contains("Discussion Points:"));
        assert!(!post.contains(HASHTAGS_HEADING));

        assert_eq!(build_prompt(ContentType::Unknown), BASE_PROMPT);
    }

    #[test]
    fn deterministic() {
        assert_eq!(build_prompt(ContentType::Video), build_prompt(ContentType::Video));
    }

    #[test]
    fn user_message_embeds_url() {
        assert_eq!(
            user_message("https://reddit.com/r/rust"),
            "Analyze this content: https://reddit.com/r/rust"
        );
    }
}
