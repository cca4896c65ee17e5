use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id_gen::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMedia {
    pub kind: MediaKind,
    pub url: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub author: PostAuthor,
    pub content: String,
    pub media: Option<PostMedia>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub posted_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl Post {
    /// Synthetic view count shown on the feed. Engagement-weighted rather
    /// than tracked: comments count double, plus a baseline of 15.
    pub fn view_count(&self) -> u32 {
        self.likes + self.comments * 2 + 15
    }
}

/// Payload for sharing a post. Only `content` is required; `tags` is the
/// raw hashtag line as typed.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub content: String,
    pub tags: String,
    pub media: Option<PostMedia>,
}

/// Hashtags are whatever whitespace-separated tokens start with `#`,
/// capped at three. Everything else on the tag line is ignored.
pub fn extract_tags(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .filter(|tag| tag.starts_with('#'))
        .take(3)
        .map(|tag| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_keep_only_hash_tokens() {
        let tags = extract_tags("#GoldenRetriever morning #walk");
        assert_eq!(tags, vec!["#GoldenRetriever", "#walk"]);
    }

    #[test]
    fn tags_cap_at_three() {
        let tags = extract_tags("#a #b #c #d #e");
        assert_eq!(tags, vec!["#a", "#b", "#c"]);
    }

    #[test]
    fn blank_tag_line_yields_no_tags() {
        assert!(extract_tags("").is_empty());
        assert!(extract_tags("no hashes here").is_empty());
    }

    #[test]
    fn view_count_weights_comments() {
        let post = Post {
            id: 1,
            author: PostAuthor {
                name: "Sarah Johnson".to_string(),
                avatar: "/images/per1.jpg".to_string(),
                location: "New York".to_string(),
            },
            content: "hello".to_string(),
            media: None,
            likes: 24,
            comments: 8,
            shares: 3,
            posted_at: Utc::now(),
            tags: vec![],
        };
        assert_eq!(post.view_count(), 24 + 16 + 15);
    }
}
