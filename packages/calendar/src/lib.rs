//! Social media content-calendar generation.
//!
//! Collects brand and campaign parameters, sends one formatted prompt to a
//! chat-completion endpoint, parses the free-text reply into structured post
//! records, and serializes the result for download as JSON or CSV. The
//! calendar lives only in session memory; each generation replaces it
//! wholesale.
//!
//! # Example
//!
//! ```rust,ignore
//! use calendar::{export, CalendarRequest, CalendarSession, Config};
//! use groq_client::GroqClient;
//!
//! let config = Config::from_env()?;
//! let client = GroqClient::new(config.api_key.clone());
//! let mut session = CalendarSession::new();
//!
//! let count = session.generate(&client, &config.model, &request).await?;
//! let json_bytes = export::to_json(session.posts())?;
//! let csv_bytes = export::to_csv(session.posts());
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod normalize;
pub mod parser;
pub mod prompts;
pub mod safety;
pub mod session;
pub mod types;

pub use config::Config;
pub use error::{CalendarError, Result};
pub use export::{to_csv, to_json};
pub use generate::generate_calendar;
pub use normalize::normalize;
pub use parser::extract_json_array;
pub use safety::{check_safety, SafetyStatus, SafetyVerdict};
pub use session::CalendarSession;
pub use types::{CalendarRequest, Hashtags, Post, RawPost};
