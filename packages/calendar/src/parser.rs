//! Tolerant extraction of a JSON array from a model reply.

use serde_json::Value;

use crate::error::{CalendarError, Result};

/// Extract and decode the JSON array embedded in `text`.
///
/// The reply is not guaranteed to be pure JSON: it may be wrapped in prose,
/// markdown fences, or explanatory text. If the trimmed text starts with `[`
/// it is decoded directly; otherwise the substring between the first `[` and
/// the last `]` (inclusive) is decoded. This is a best-effort heuristic, not
/// a balanced-bracket scanner: it assumes the model emits at most one
/// top-level array and that no unrelated `]` follows it in trailing prose.
///
/// Fails with [`CalendarError::NoArrayFound`] when the text contains no `[`
/// or no `]`, and with [`CalendarError::MalformedJson`] when the extracted
/// text does not decode as a JSON array.
pub fn extract_json_array(text: &str) -> Result<Vec<Value>> {
    let trimmed = text.trim();

    let candidate = if trimmed.starts_with('[') {
        trimmed
    } else {
        match (trimmed.find('['), trimmed.rfind(']')) {
            (Some(start), Some(end)) if start <= end => &trimmed[start..=end],
            // A `]` before the first `[` leaves nothing to decode; fall
            // through to the JSON error rather than NoArrayFound, matching
            // the inclusive-substring contract.
            (Some(_), Some(_)) => "",
            _ => {
                return Err(CalendarError::NoArrayFound {
                    reply: trimmed.to_string(),
                })
            }
        }
    };

    serde_json::from_str(candidate).map_err(|source| CalendarError::MalformedJson {
        source,
        context: candidate.to_string(),
    })
}
