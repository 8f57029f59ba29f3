//! Video identifier extraction from YouTube URLs.

use regex::Regex;
use std::sync::OnceLock;

fn video_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // First 11-character id run following `v=` or a path separator.
    RE.get_or_init(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid video id regex"))
}

/// Extract the video ID from a YouTube watch or short link.
///
/// ```
/// use tubescribe::transcript::extract_video_id;
///
/// assert_eq!(
///     extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
///     Some("dQw4w9WgXcQ")
/// );
/// assert_eq!(extract_video_id("not-a-url"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?start=10"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(extract_video_id("not-a-url"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        // A bare id has no `v=` or `/` in front of it.
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), None);
    }
}
