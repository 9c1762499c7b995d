//! Normalization of parsed reply records into the canonical post schema.

use serde_json::Value;

use crate::error::{CalendarError, Result};
use crate::types::{Hashtags, Post, RawPost};

/// Normalize loosely-typed reply records into [`Post`]s, in original order.
///
/// Starting a 1-based counter at the first record:
/// - a missing `id` is assigned the record's position;
/// - a `hashtags` string is split on whitespace into a list;
/// - an absent `hashtags` becomes an empty list;
/// - every other field passes through unchanged, absent fields staying
///   absent.
///
/// Deliberately permissive: nothing is validated against the advisory
/// `post_type` values or the caption character limit. A record that does not
/// fit the loose schema fails the whole call — a partial calendar is never
/// produced.
pub fn normalize(records: Vec<Value>) -> Result<Vec<Post>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let context = record.to_string();
            let raw: RawPost = serde_json::from_value(record)
                .map_err(|source| CalendarError::MalformedJson { source, context })?;
            Ok(normalize_record(raw, index + 1))
        })
        .collect()
}

fn normalize_record(raw: RawPost, position: usize) -> Post {
    let hashtags = match raw.hashtags {
        Some(Hashtags::Text(raw_tags)) => {
            Hashtags::List(raw_tags.split_whitespace().map(str::to_string).collect())
        }
        Some(list @ Hashtags::List(_)) => list,
        None => Hashtags::List(Vec::new()),
    };

    Post {
        id: raw.id.unwrap_or(position as u64),
        date: raw.date,
        platform: raw.platform,
        post_type: raw.post_type,
        caption: raw.caption,
        hashtags,
        image_prompt: raw.image_prompt,
        alt_text: raw.alt_text,
        cta: raw.cta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_ids_get_one_based_positions() {
        let posts = normalize(vec![
            json!({"caption": "first"}),
            json!({"caption": "second"}),
            json!({"id": 42, "caption": "third"}),
            json!({"caption": "fourth"}),
        ])
        .unwrap();

        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].id, 2);
        assert_eq!(posts[2].id, 42);
        assert_eq!(posts[3].id, 4);
    }

    #[test]
    fn test_hashtag_string_is_split_on_whitespace() {
        let posts = normalize(vec![json!({"hashtags": "#a #b"})]).unwrap();
        assert_eq!(
            posts[0].hashtags,
            Hashtags::List(vec!["#a".into(), "#b".into()])
        );

        let posts = normalize(vec![json!({"hashtags": "  #a\t#b\n#c "})]).unwrap();
        assert_eq!(
            posts[0].hashtags,
            Hashtags::List(vec!["#a".into(), "#b".into(), "#c".into()])
        );
    }

    #[test]
    fn test_absent_hashtags_become_empty_list() {
        let posts = normalize(vec![json!({"caption": "Hi"})]).unwrap();
        assert_eq!(posts[0].hashtags, Hashtags::List(vec![]));
    }

    #[test]
    fn test_hashtag_list_passes_through() {
        let posts = normalize(vec![json!({"hashtags": ["#x", "#y"]})]).unwrap();
        assert_eq!(
            posts[0].hashtags,
            Hashtags::List(vec!["#x".into(), "#y".into()])
        );
    }

    #[test]
    fn test_other_fields_pass_through_and_absent_stays_absent() {
        let posts = normalize(vec![json!({
            "date": "2024-01-01",
            "platform": "Instagram",
            "caption": "Hi",
            "CTA": "Buy"
        })])
        .unwrap();

        let post = &posts[0];
        assert_eq!(post.date.as_deref(), Some("2024-01-01"));
        assert_eq!(post.platform.as_deref(), Some("Instagram"));
        assert_eq!(post.cta.as_deref(), Some("Buy"));
        assert!(post.post_type.is_none());
        assert!(post.image_prompt.is_none());
        assert!(post.alt_text.is_none());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let posts = normalize(vec![
            json!({"caption": "Hi", "hashtags": "#a #b"}),
            json!({"id": 7, "caption": "Bye"}),
        ])
        .unwrap();

        // Re-normalizing the JSON image of the output is a fixed point.
        let image = serde_json::to_value(&posts).unwrap();
        let again = normalize(image.as_array().unwrap().clone()).unwrap();
        assert_eq!(again, posts);
    }

    #[test]
    fn test_non_object_record_fails_the_whole_call() {
        let result = normalize(vec![json!({"caption": "ok"}), json!("not a record")]);
        assert!(matches!(
            result,
            Err(CalendarError::MalformedJson { .. })
        ));
    }
}
