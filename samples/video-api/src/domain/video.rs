//! The video entry stored in a session list.

use serde::{Deserialize, Serialize};

/// A titled link to a video.
///
/// Serialized as `{"title": ..., "url": ...}` both on the wire and in the
/// cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Video {
    /// Display title.
    pub title: String,
    /// Link to the video.
    pub url: String,
}

impl Video {
    /// Creates a new `Video`.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn video_json_uses_lowercase_fields() {
        let video = Video::new("one", "url://one");
        let json = serde_json::to_value(&video).unwrap();

        assert_eq!(json, serde_json::json!({ "title": "one", "url": "url://one" }));
    }

    #[rstest]
    fn video_deserializes_from_request_body() {
        let video: Video = serde_json::from_str(r#"{"title":"two","url":"url://two"}"#).unwrap();
        assert_eq!(video, Video::new("two", "url://two"));
    }
}
