//! Serialization of a post list to downloadable JSON and CSV bytes.
//!
//! Both functions are pure and read-only over the post list; they can be
//! called zero, one, or many times, in any order, without affecting session
//! state.

use crate::error::Result;
use crate::types::Post;

/// Download filename for the JSON export.
pub const JSON_FILENAME: &str = "calendar.json";

/// MIME type for the JSON export.
pub const JSON_MIME: &str = "application/json";

/// Download filename for the CSV export.
pub const CSV_FILENAME: &str = "calendar.csv";

/// MIME type for the CSV export.
pub const CSV_MIME: &str = "text/csv";

/// Fixed column order of the CSV export.
const CSV_HEADER: [&str; 9] = [
    "id",
    "date",
    "platform",
    "post_type",
    "caption",
    "hashtags",
    "image_prompt",
    "alt_text",
    "CTA",
];

/// Pretty-printed JSON encoding of the full post list, UTF-8.
pub fn to_json(posts: &[Post]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(posts)?)
}

/// CSV encoding of the post list, UTF-8, with a fixed header row.
///
/// Missing fields render as empty strings. Hashtags render as their elements
/// joined by single spaces, or pass through unchanged for a record that still
/// carries a raw string.
pub fn to_csv(posts: &[Post]) -> Vec<u8> {
    let mut out = String::new();
    write_row(&mut out, CSV_HEADER.iter().map(|name| name.to_string()));

    for post in posts {
        write_row(
            &mut out,
            [
                post.id.to_string(),
                post.date.clone().unwrap_or_default(),
                post.platform.clone().unwrap_or_default(),
                post.post_type.clone().unwrap_or_default(),
                post.caption.clone().unwrap_or_default(),
                post.hashtags.join(),
                post.image_prompt.clone().unwrap_or_default(),
                post.alt_text.clone().unwrap_or_default(),
                post.cta.clone().unwrap_or_default(),
            ]
            .into_iter(),
        );
    }

    out.into_bytes()
}

fn write_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let row = fields
        .map(|field| escape_field(&field))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&row);
    out.push_str("\r\n");
}

/// Quote a field when it contains a comma, quote, or line break; embedded
/// quotes are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
