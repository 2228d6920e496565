//! Port resolving a bearer credential to the visitor it was issued to.

use async_trait::async_trait;

use crate::domain::{BearerToken, UserId};

use super::define_port_error;

/// Token accepted by [`FixtureSessionProvider`].
pub const FIXTURE_SESSION_TOKEN: &str = "fixture-session-token";

/// Identity returned by [`FixtureSessionProvider`].
pub const FIXTURE_SESSION_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

define_port_error! {
    /// Errors raised by session provider adapters.
    pub enum SessionProviderError {
        /// The identity service rejected the token as invalid or expired.
        InvalidToken { message: String } =>
            "session token rejected: {message}",
        /// The identity service could not be reached or answered unexpectedly.
        Unavailable { message: String } =>
            "session provider unavailable: {message}",
    }
}

/// Resolves bearer tokens issued by the identity service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Return the user the token belongs to.
    async fn resolve_user(&self, token: &BearerToken) -> Result<UserId, SessionProviderError>;
}

/// Development provider accepting a single well-known token.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSessionProvider;

#[async_trait]
impl SessionProvider for FixtureSessionProvider {
    async fn resolve_user(&self, token: &BearerToken) -> Result<UserId, SessionProviderError> {
        if token.expose() != FIXTURE_SESSION_TOKEN {
            return Err(SessionProviderError::invalid_token("unknown fixture token"));
        }
        UserId::new(FIXTURE_SESSION_USER_ID)
            .map_err(|err| SessionProviderError::unavailable(format!("invalid fixture user id: {err}")))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FIXTURE_SESSION_TOKEN, true)]
    #[case("someone-else", false)]
    #[tokio::test]
    async fn fixture_accepts_only_the_known_token(#[case] raw: &str, #[case] accepted: bool) {
        let token = BearerToken::new(raw).expect("token shape");
        let result = FixtureSessionProvider.resolve_user(&token).await;
        match (accepted, result) {
            (true, Ok(id)) => assert_eq!(id.to_string(), FIXTURE_SESSION_USER_ID),
            (false, Err(err)) => assert!(matches!(err, SessionProviderError::InvalidToken { .. })),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(id)) => panic!("expected failure, got success: {id}"),
        }
    }
}
