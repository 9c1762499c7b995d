//! Session-scoped calendar state.

use groq_client::GroqClient;

use crate::error::Result;
use crate::generate::generate_calendar;
use crate::types::{CalendarRequest, Post};

/// Holds the calendar generated in one user session.
///
/// A new generation replaces the held posts wholesale, but only on success: a
/// failed generation leaves the previous calendar untouched. Exports read the
/// held posts and never mutate them. Sessions are not shared, so no locking
/// is involved.
#[derive(Debug, Default)]
pub struct CalendarSession {
    posts: Vec<Post>,
}

impl CalendarSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new calendar and replace the held one, returning the post
    /// count. On failure the previously held calendar is kept.
    pub async fn generate(
        &mut self,
        client: &GroqClient,
        model: &str,
        request: &CalendarRequest,
    ) -> Result<usize> {
        let posts = generate_calendar(client, model, request).await?;
        let count = posts.len();
        self.posts = posts;
        Ok(count)
    }

    /// The currently held calendar.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Whether no calendar is held.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Drop the held calendar.
    pub fn clear(&mut self) {
        self.posts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = CalendarSession::new();
        assert!(session.is_empty());
        assert!(session.posts().is_empty());
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_the_session_empty_and_errors() {
        let client = GroqClient::new("gsk-test").with_base_url("http://127.0.0.1:9");
        let mut session = CalendarSession::new();

        let request = CalendarRequest {
            brand_info: "Brand".into(),
            tone: "Friendly".into(),
            audience: "Everyone".into(),
            platforms: vec!["Instagram".into()],
            duration: 1,
            start_date: "2024-01-01".into(),
            char_limit: 220,
        };

        let result = session.generate(&client, "llama-3.1-8b-instant", &request).await;
        assert!(result.is_err());
        assert!(session.is_empty());
    }
}
