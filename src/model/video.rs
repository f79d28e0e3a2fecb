use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier (exact-case)
    pub id: String,

    /// Display title
    pub title: String,

    /// Tags in source order, e.g. `#dog`
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Check whether this video carries `tag`, ignoring letter case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Check whether the title contains `term`, ignoring letter case
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funny_dogs() -> Video {
        Video::new(
            "funny_dogs_video_id",
            "Funny Dogs",
            vec!["#dog".to_string(), "#animal".to_string()],
        )
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            funny_dogs().to_string(),
            "Funny Dogs (funny_dogs_video_id) [#dog #animal]"
        );

        let untagged = Video::new("nothing_video_id", "Video about nothing", Vec::new());
        assert_eq!(untagged.to_string(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_tag_match_ignores_case() {
        let video = funny_dogs();
        assert!(video.has_tag("#DOG"));
        assert!(video.has_tag("#Animal"));
        assert!(!video.has_tag("dog"));
        assert!(!video.has_tag("#cat"));
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let video = funny_dogs();
        assert!(video.title_contains("funny"));
        assert!(video.title_contains("DOGS"));
        assert!(!video.title_contains("cats"));
    }
}
