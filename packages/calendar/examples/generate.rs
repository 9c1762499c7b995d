//! Generate a small calendar and write calendar.json / calendar.csv.
//!
//! Requires `GROQ_API_KEY` in the environment (or a `.env` file).

use calendar::{check_safety, export, CalendarRequest, CalendarSession, Config};
use groq_client::GroqClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let client = GroqClient::new(config.api_key.clone());

    let request = CalendarRequest {
        brand_info: "My Brand: Eco-friendly skincare products.".to_string(),
        tone: "Friendly".to_string(),
        audience: "Teens & adults".to_string(),
        platforms: vec!["Instagram".to_string()],
        duration: 5,
        start_date: "2024-01-01".to_string(),
        char_limit: 220,
    };

    let mut session = CalendarSession::new();
    let count = session.generate(&client, &config.model, &request).await?;
    println!("Generated {count} posts");

    if let Some(caption) = session.posts().first().and_then(|p| p.caption.as_deref()) {
        let verdict = check_safety(&client, &config.model, caption).await;
        println!("First caption safety: {:?}", verdict.status);
    }

    std::fs::write(export::JSON_FILENAME, export::to_json(session.posts())?)?;
    std::fs::write(export::CSV_FILENAME, export::to_csv(session.posts()))?;
    println!("Wrote {} and {}", export::JSON_FILENAME, export::CSV_FILENAME);

    Ok(())
}
