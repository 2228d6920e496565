//! Driving port for the registration submission flow.
//!
//! Inbound adapters hand over whatever they could extract from the request.
//! Both parts are optional so the service alone decides the order in which
//! a missing credential and a malformed payload are reported.

use async_trait::async_trait;

use crate::domain::{BearerToken, Error, RegistrationForm, RegistrationReceipt};

/// Submission as received from the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationRequest {
    /// Bearer credential, absent when the header was missing or not a
    /// `Bearer` value.
    pub credential: Option<BearerToken>,
    /// Form payload, absent when the body was not a JSON object.
    pub form: Option<RegistrationForm>,
}

/// Use-case port for registering a visitor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Authenticate, validate, persist, order and reconcile.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::ErrorCode::Unauthorized`] for a missing or rejected
    ///   credential.
    /// - [`crate::domain::ErrorCode::InvalidRequest`] for a malformed payload
    ///   or the first failing field.
    /// - [`crate::domain::ErrorCode::StoreError`] when the insert fails.
    /// - [`crate::domain::ErrorCode::ProviderError`] when the order could not
    ///   be created. The inserted record stays pending.
    async fn register(&self, request: RegistrationRequest) -> Result<RegistrationReceipt, Error>;
}
