//! OAuth2 refresh-token flow for the Google Workspace APIs.

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::debug;

use super::{google_error_message, WorkspaceError};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Tokens are refreshed this long before Google says they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

/// Long-lived credentials supplied through configuration.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self, now: Instant) -> bool {
        now + EXPIRY_MARGIN < self.expires_at
    }
}

/// Hands out access tokens, exchanging the refresh token only when the cached
/// one is about to expire.
pub struct TokenSource {
    http: Client,
    credentials: OAuthCredentials,
    cache: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub fn new(http: Client, credentials: OAuthCredentials) -> Self {
        Self {
            http,
            credentials,
            cache: Mutex::new(None),
        }
    }

    pub async fn access_token(&self) -> Result<String, WorkspaceError> {
        let mut cache = self.cache.lock().await;

        if let Some(token) = cache.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.value.clone());
        }

        let fresh = self.refresh().await?;
        let value = fresh.value.clone();
        *cache = Some(fresh);
        Ok(value)
    }

    async fn refresh(&self) -> Result<CachedToken, WorkspaceError> {
        debug!("Refreshing Google access token");

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("refresh_token", self.credentials.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WorkspaceError::Auth(format!(
                "token refresh failed (status {}): {}",
                status.as_u16(),
                google_error_message(body)
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.into_cached(Instant::now()))
    }
}

impl TokenResponse {
    fn into_cached(self, issued_at: Instant) -> CachedToken {
        let lifetime = self.expires_in.unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);
        CachedToken {
            value: self.access_token,
            expires_at: issued_at + Duration::from_secs(lifetime),
        }
    }
}
