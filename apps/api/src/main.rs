mod config;
mod errors;
mod fanout;
mod google;
mod interview;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::fanout::IntakeSettings;
use crate::google::auth::OAuthCredentials;
use crate::google::GoogleWorkspace;
use crate::interview::prompts::interview_system_prompt;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize Google Workspace client
    let office = GoogleWorkspace::new(OAuthCredentials {
        client_id: config.google_client_id.clone(),
        client_secret: config.google_client_secret.clone(),
        refresh_token: config.google_refresh_token.clone(),
    })?;
    info!("Google Workspace client initialized");

    let intake = IntakeSettings::from_config(&config);
    let interview_prompt = interview_system_prompt(&intake.company_name, &intake.booking_link);

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        office: Arc::new(office),
        interview_prompt: interview_prompt.into(),
        intake: Arc::new(intake),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // intake widget is embedded on another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
