//! Caption safety checking.
//!
//! Fail-open by contract: any transport or decode failure yields the default
//! safe verdict, so callers cannot distinguish "checked and safe" from
//! "check failed". The fallback path is logged.

use groq_client::{ChatRequest, GroqClient, Message};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generate::{SYSTEM_MESSAGE, TEMPERATURE};
use crate::prompts::format_safety_prompt;

/// Output-token ceiling for safety checks.
const SAFETY_MAX_TOKENS: u32 = 200;

/// Caption safety status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyStatus {
    Safe,
    Unsafe,
}

/// Verdict for one caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    /// Whether the caption was judged safe
    pub status: SafetyStatus,
    /// Suggested replacement caption; empty when none is needed
    pub replacement: String,
}

impl Default for SafetyVerdict {
    fn default() -> Self {
        Self {
            status: SafetyStatus::Safe,
            replacement: String::new(),
        }
    }
}

/// Check one caption against the safety prompt.
///
/// The reply is decoded directly as a JSON object; unlike calendar replies,
/// no bracket-extraction heuristic is applied.
pub async fn check_safety(client: &GroqClient, model: &str, caption: &str) -> SafetyVerdict {
    let prompt = format_safety_prompt(caption);

    let reply = match client
        .chat_completion(
            ChatRequest::new(model)
                .message(Message::system(SYSTEM_MESSAGE))
                .message(Message::user(prompt))
                .temperature(TEMPERATURE)
                .max_tokens(SAFETY_MAX_TOKENS),
        )
        .await
    {
        Ok(reply) => reply,
        Err(error) => {
            warn!(%error, "safety check call failed, defaulting to SAFE");
            return SafetyVerdict::default();
        }
    };

    match serde_json::from_str(&reply.content) {
        Ok(verdict) => verdict,
        Err(error) => {
            warn!(%error, "safety verdict did not decode, defaulting to SAFE");
            SafetyVerdict::default()
        }
    }
}
