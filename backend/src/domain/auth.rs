//! Bearer credential presented by the landing page.
//!
//! Header parsing lives here so the HTTP extractor and the service agree on
//! what counts as a missing credential.

use std::fmt;

use zeroize::Zeroizing;

/// Scheme prefix required on the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Reasons an `Authorization` header value is not a usable bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerTokenError {
    #[error("authorization header must use the Bearer scheme")]
    MissingScheme,
    #[error("bearer token must not be empty")]
    EmptyToken,
}

/// Opaque session token forwarded to the session provider.
///
/// The token is zeroised on drop and never printed by `Debug`.
///
/// # Examples
/// ```
/// use backend::domain::BearerToken;
///
/// let token = BearerToken::from_header_value("Bearer abc.def").expect("bearer token");
/// assert_eq!(token.expose(), "abc.def");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Parse a raw `Authorization` header value.
    ///
    /// The scheme match is case-sensitive, mirroring what the landing page
    /// sends.
    pub fn from_header_value(value: &str) -> Result<Self, BearerTokenError> {
        let token = value
            .strip_prefix(BEARER_PREFIX)
            .ok_or(BearerTokenError::MissingScheme)?;
        Self::new(token)
    }

    /// Wrap an already-extracted token.
    pub fn new(token: &str) -> Result<Self, BearerTokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(BearerTokenError::EmptyToken);
        }
        Ok(Self(Zeroizing::new(token.to_owned())))
    }

    /// Borrow the raw token for forwarding to the session provider.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}
