//! Reqwest-backed session resolution.
//!
//! 401 and 403 mean the token is bad. Every other failure, including an
//! unparseable user id, is reported as the service being unavailable.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::AuthUserDto;
use crate::domain::ports::{SessionProvider, SessionProviderError};
use crate::domain::{BearerToken, UserId};
use crate::outbound::http_support::{body_preview, client_with_timeout, join_segments};

const API_KEY_HEADER: &str = "apikey";

/// Session provider calling `GET {supabase_url}/auth/v1/user`.
pub struct SupabaseSessionProvider {
    client: Client,
    user_url: Url,
    service_key: Zeroizing<String>,
}

impl SupabaseSessionProvider {
    /// # Errors
    ///
    /// Returns [`SessionProviderError::Unavailable`] when the URL cannot carry
    /// a path or the client cannot be built.
    pub fn new(
        supabase_url: &Url,
        service_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SessionProviderError> {
        let user_url = join_segments(supabase_url, &["auth", "v1", "user"]).ok_or_else(|| {
            SessionProviderError::unavailable("identity service URL cannot carry a path")
        })?;
        let client = client_with_timeout(timeout)
            .map_err(|err| SessionProviderError::unavailable(err.to_string()))?;
        Ok(Self {
            client,
            user_url,
            service_key: Zeroizing::new(service_key.into()),
        })
    }
}

#[async_trait]
impl SessionProvider for SupabaseSessionProvider {
    async fn resolve_user(&self, token: &BearerToken) -> Result<UserId, SessionProviderError> {
        let response = self
            .client
            .get(self.user_url.clone())
            .bearer_auth(token.expose())
            .header(API_KEY_HEADER, self.service_key.as_str())
            .send()
            .await
            .map_err(|err| SessionProviderError::unavailable(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| SessionProviderError::unavailable(err.to_string()))?;

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
                SessionProviderError::invalid_token(format!("identity service answered {status}")),
            ),
            _ if !status.is_success() => {
                debug!(
                    status = status.as_u16(),
                    body = %body_preview(&body),
                    "identity service failed"
                );
                Err(SessionProviderError::unavailable(format!(
                    "identity service answered {status}"
                )))
            }
            _ => parse_user_id(&body),
        }
    }
}

fn parse_user_id(body: &[u8]) -> Result<UserId, SessionProviderError> {
    let user: AuthUserDto = serde_json::from_slice(body).map_err(|err| {
        SessionProviderError::unavailable(format!("invalid user payload: {err}"))
    })?;
    UserId::new(&user.id).map_err(|err| SessionProviderError::unavailable(err.to_string()))
}
