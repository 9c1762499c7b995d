//! Post schema and request types for calendar generation.

use serde::{Deserialize, Serialize};

/// One scheduled social-media post.
///
/// All content fields are optional: the model reply is not guaranteed to
/// include them, and absent fields stay absent through JSON export. Defaults
/// are applied only when rendering CSV rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique within a calendar; assigned from the reply position when the
    /// model omits it.
    pub id: u64,

    /// Calendar date, e.g. "2024-01-01".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Target platform, e.g. "Instagram".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Advisory post type: image, reel, story, text, link. Not enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,

    /// Caption text. Bounded by the caller-supplied character limit at
    /// generation time; not enforced post-hoc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Hashtags; always a list after normalization.
    pub hashtags: Hashtags,

    /// Descriptive prompt for an image-generation tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,

    /// Accessibility description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    /// Call to action.
    #[serde(rename = "CTA", skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

/// Hashtags as they appear on the wire.
///
/// Models sometimes emit a single whitespace-delimited string instead of a
/// JSON array. Normalization always produces `List`; the CSV exporter still
/// renders `Text` for records that skipped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hashtags {
    /// A list of hashtag strings
    List(Vec<String>),
    /// A single whitespace-delimited string
    Text(String),
}

impl Hashtags {
    /// Render for a CSV cell: list elements joined by single spaces, raw
    /// text passed through unchanged.
    pub fn join(&self) -> String {
        match self {
            Hashtags::List(tags) => tags.join(" "),
            Hashtags::Text(raw) => raw.clone(),
        }
    }
}

impl Default for Hashtags {
    fn default() -> Self {
        Hashtags::List(Vec::new())
    }
}

/// A post record as decoded from the model reply, before normalization.
///
/// Every field is optional; unknown fields are dropped. Field presence and
/// shape are only settled by [`crate::normalize::normalize`] — parsing and
/// validation are two distinct stages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    pub id: Option<u64>,
    pub date: Option<String>,
    pub platform: Option<String>,
    pub post_type: Option<String>,
    pub caption: Option<String>,
    pub hashtags: Option<Hashtags>,
    pub image_prompt: Option<String>,
    pub alt_text: Option<String>,
    #[serde(rename = "CTA")]
    pub cta: Option<String>,
}

/// Validated input bundle for one generation request.
///
/// The form layer owns range validation (duration, char_limit); these values
/// are trusted here.
#[derive(Debug, Clone)]
pub struct CalendarRequest {
    /// Brand name and description, free text
    pub brand_info: String,
    /// Desired tone, e.g. "Friendly"
    pub tone: String,
    /// Target audience, free text
    pub audience: String,
    /// Platforms to generate for
    pub platforms: Vec<String>,
    /// Calendar length in days
    pub duration: u32,
    /// First calendar date, e.g. "2024-01-01"
    pub start_date: String,
    /// Caption character limit
    pub char_limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtags_decode_from_list_and_string() {
        let list: Hashtags = serde_json::from_str(r##"["#a", "#b"]"##).unwrap();
        assert_eq!(list, Hashtags::List(vec!["#a".into(), "#b".into()]));

        let text: Hashtags = serde_json::from_str(r##""#a #b""##).unwrap();
        assert_eq!(text, Hashtags::Text("#a #b".into()));
    }

    #[test]
    fn test_hashtags_join() {
        let list = Hashtags::List(vec!["#a".into(), "#b".into()]);
        assert_eq!(list.join(), "#a #b");

        let text = Hashtags::Text("#a #b".into());
        assert_eq!(text.join(), "#a #b");

        assert_eq!(Hashtags::default().join(), "");
    }

    #[test]
    fn test_post_serializes_cta_uppercase_and_skips_absent_fields() {
        let post = Post {
            id: 1,
            date: Some("2024-01-01".into()),
            platform: None,
            post_type: None,
            caption: None,
            hashtags: Hashtags::default(),
            image_prompt: None,
            alt_text: None,
            cta: Some("Buy".into()),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["CTA"], "Buy");
        assert!(value.get("platform").is_none());
        assert!(value.get("caption").is_none());
        assert_eq!(value["hashtags"], serde_json::json!([]));
    }

    #[test]
    fn test_raw_post_tolerates_missing_and_unknown_fields() {
        let raw: RawPost =
            serde_json::from_str(r#"{"caption": "Hi", "mood": "sunny"}"#).unwrap();

        assert_eq!(raw.caption.as_deref(), Some("Hi"));
        assert!(raw.id.is_none());
        assert!(raw.hashtags.is_none());
    }
}
