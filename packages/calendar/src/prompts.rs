//! Prompt templates for calendar generation and caption safety checks.
//!
//! Both templates are static text with named substitution points; formatting
//! is a pure string operation with no validation.

use crate::types::CalendarRequest;

/// Prompt for generating a multi-day content calendar. The model is
/// instructed to return only a JSON array of post objects.
pub const CALENDAR_PROMPT: &str = r#"Generate a {duration}-day social media content calendar for these platforms: {platforms}.
Tone: {tone}.
Audience: {audience}.
Start date: {start_date}.
Caption limit: {char_limit} characters.

Each post must include:
- id
- date
- platform
- post_type (image, reel, story, text, link)
- caption
- hashtags (list)
- image_prompt
- alt_text
- CTA

Brand info:
{brand_info}

Return ONLY a JSON array."#;

/// Prompt for checking a single caption. The model is expected to reply with
/// a two-field JSON object.
pub const SAFETY_PROMPT: &str = r#"Check this caption for safety. Respond with:
{"status":"SAFE" or "UNSAFE", "replacement":""}

Caption: "{caption}""#;

/// Format the calendar prompt from a generation request.
pub fn format_calendar_prompt(request: &CalendarRequest) -> String {
    let platforms = request
        .platforms
        .iter()
        .map(|p| p.trim())
        .collect::<Vec<_>>()
        .join(", ");

    CALENDAR_PROMPT
        .replace("{duration}", &request.duration.to_string())
        .replace("{platforms}", &platforms)
        .replace("{tone}", &request.tone)
        .replace("{audience}", &request.audience)
        .replace("{start_date}", &request.start_date)
        .replace("{char_limit}", &request.char_limit.to_string())
        .replace("{brand_info}", &request.brand_info)
}

/// Format the safety prompt for one caption. Embedded double quotes are
/// escaped so the caption stays inside its quoted slot.
pub fn format_safety_prompt(caption: &str) -> String {
    SAFETY_PROMPT.replace("{caption}", &caption.replace('"', "\\\""))
}
