//! The generation pipeline: prompt, completion, extraction, normalization.

use groq_client::{ChatRequest, GroqClient, Message};
use tracing::{debug, info};

use crate::error::Result;
use crate::normalize::normalize;
use crate::parser::extract_json_array;
use crate::prompts::format_calendar_prompt;
use crate::types::{CalendarRequest, Post};

/// System message establishing the assistant's role.
pub(crate) const SYSTEM_MESSAGE: &str = "You are a helpful social media content generator.";

/// Sampling temperature; deterministic-leaning.
pub(crate) const TEMPERATURE: f32 = 0.2;

/// Output-token ceiling for calendar generation.
const CALENDAR_MAX_TOKENS: u32 = 1400;

/// Generate a calendar: one completion call, then tolerant parsing and
/// normalization of the reply.
///
/// Fails as a whole — a partial calendar is never produced. There is no
/// retry; a transport or parse failure surfaces immediately.
pub async fn generate_calendar(
    client: &GroqClient,
    model: &str,
    request: &CalendarRequest,
) -> Result<Vec<Post>> {
    let prompt = format_calendar_prompt(request);

    let reply = client
        .chat_completion(
            ChatRequest::new(model)
                .message(Message::system(SYSTEM_MESSAGE))
                .message(Message::user(prompt))
                .temperature(TEMPERATURE)
                .max_tokens(CALENDAR_MAX_TOKENS),
        )
        .await?;

    debug!(reply_len = reply.content.len(), "received calendar reply");

    let records = extract_json_array(&reply.content)?;
    let posts = normalize(records)?;

    info!(posts = posts.len(), days = request.duration, "generated calendar");

    Ok(posts)
}
