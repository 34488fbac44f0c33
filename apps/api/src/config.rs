use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_refresh_token: String,
    pub google_folder_id: String,
    pub google_sheet_id: String,
    pub sheet_range: String,
    pub operator_email: String,
    pub sender_email: String,
    pub sender_name: String,
    pub company_name: String,
    pub booking_link: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            google_client_id: require_env("GOOGLE_CLIENT_ID")?,
            google_client_secret: require_env("GOOGLE_CLIENT_SECRET")?,
            google_refresh_token: require_env("GOOGLE_REFRESH_TOKEN")?,
            google_folder_id: require_env("GOOGLE_FOLDER_ID")?,
            google_sheet_id: require_env("GOOGLE_SHEET_ID")?,
            sheet_range: env_or("SHEET_RANGE", "Pipeline!A:W"),
            operator_email: require_env("OPERATOR_EMAIL")?,
            sender_email: require_env("SENDER_EMAIL")?,
            sender_name: env_or("SENDER_NAME", "Travis"),
            company_name: env_or("COMPANY_NAME", "Bainbridge AI"),
            booking_link: require_env("BOOKING_LINK")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
