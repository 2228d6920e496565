//! Registration submission service.
//!
//! The flow is strictly linear: authenticate, validate, insert, create the
//! ticketing order, then link the order to the record. Nothing is retried
//! and nothing is rolled back. A provider failure after the insert leaves
//! the record in the pending-order state, and a failed link is logged while
//! the visitor still receives the order they paid for.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    RegistrationCommand, RegistrationRepository, RegistrationRepositoryError, RegistrationRequest,
    SessionProvider, SessionProviderError, TicketOrderRequest, TicketingProvider,
    TicketingProviderError,
};
use crate::domain::{
    BearerToken, Error, NewRegistration, RegistrationFieldError, RegistrationReceipt, UserId,
    validate_form,
};

/// Message for an absent or non-Bearer `Authorization` header.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Missing or invalid authorization header";
/// Message for a credential the session provider did not accept.
pub const INVALID_CREDENTIAL_MESSAGE: &str = "Invalid authentication token";
/// Message for a body that is not a registration object.
pub const MALFORMED_PAYLOAD_MESSAGE: &str = "Registration payload must be a JSON object";
/// Message for a failed insert.
pub const STORE_FAILURE_MESSAGE: &str = "Registration could not be saved";

/// Registration handler implementing [`RegistrationCommand`].
///
/// Generic over its ports so tests can plug mocks while the server plugs
/// trait objects chosen at startup.
pub struct RegistrationService<S: ?Sized, R: ?Sized, T: ?Sized> {
    sessions: Arc<S>,
    registrations: Arc<R>,
    ticketing: Arc<T>,
}

impl<S: ?Sized, R: ?Sized, T: ?Sized> Clone for RegistrationService<S, R, T> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            registrations: Arc::clone(&self.registrations),
            ticketing: Arc::clone(&self.ticketing),
        }
    }
}

impl<S: ?Sized, R: ?Sized, T: ?Sized> RegistrationService<S, R, T> {
    /// Create a new service over the given ports.
    pub fn new(sessions: Arc<S>, registrations: Arc<R>, ticketing: Arc<T>) -> Self {
        Self {
            sessions,
            registrations,
            ticketing,
        }
    }
}

impl<S, R, T> RegistrationService<S, R, T>
where
    S: SessionProvider + ?Sized,
    R: RegistrationRepository + ?Sized,
    T: TicketingProvider + ?Sized,
{
    async fn authenticate(&self, credential: Option<&BearerToken>) -> Result<UserId, Error> {
        let token = credential.ok_or_else(|| Error::unauthorized(MISSING_CREDENTIAL_MESSAGE))?;
        self.sessions
            .resolve_user(token)
            .await
            .map_err(Self::map_session_error)
    }

    fn map_session_error(error: SessionProviderError) -> Error {
        match &error {
            SessionProviderError::InvalidToken { .. } => {
                info!(error = %error, "bearer token rejected by session provider");
            }
            SessionProviderError::Unavailable { .. } => {
                warn!(error = %error, "session provider unavailable");
            }
        }
        Error::unauthorized(INVALID_CREDENTIAL_MESSAGE)
    }

    fn map_field_error(error: RegistrationFieldError) -> Error {
        Error::invalid_request(error.to_string()).with_details(json!({
            "field": error.field(),
            "code": error.code(),
        }))
    }

    fn map_insert_error(error: RegistrationRepositoryError) -> Error {
        error!(error = %error, "registration insert failed");
        let code = match error {
            RegistrationRepositoryError::Connection { .. } => "store_unavailable",
            _ => "store_rejected",
        };
        Error::store(STORE_FAILURE_MESSAGE).with_details(json!({ "code": code }))
    }

    fn map_provider_error(error: &TicketingProviderError) -> Error {
        let status = match error {
            TicketingProviderError::Rejected { status, .. } => Some(*status),
            _ => None,
        };
        let mut mapped = Error::provider(error.visitor_message());
        if let Some(status) = status {
            mapped = mapped.with_details(json!({ "providerStatus": status }));
        }
        mapped
    }
}

#[async_trait]
impl<S, R, T> RegistrationCommand for RegistrationService<S, R, T>
where
    S: SessionProvider + ?Sized,
    R: RegistrationRepository + ?Sized,
    T: TicketingProvider + ?Sized,
{
    async fn register(&self, request: RegistrationRequest) -> Result<RegistrationReceipt, Error> {
        let RegistrationRequest { credential, form } = request;
        let user_id = self.authenticate(credential.as_ref()).await?;

        let form = form.ok_or_else(|| Error::invalid_request(MALFORMED_PAYLOAD_MESSAGE))?;
        let validated = validate_form(form).map_err(Self::map_field_error)?;
        info!(
            user_id = %user_id,
            email_domain = validated.attendee.email_domain(),
            "registration attempt"
        );

        let record = self
            .registrations
            .insert(&NewRegistration {
                attendee: validated.attendee.clone(),
                user_id: Some(user_id),
            })
            .await
            .map_err(Self::map_insert_error)?;
        info!(registration_id = %record.id, "registration persisted with pending order");

        let order_request = TicketOrderRequest::single(validated.selection, validated.attendee);
        let order_id = match self.ticketing.create_order(&order_request).await {
            Ok(order_id) => order_id,
            Err(err) => {
                warn!(
                    registration_id = %record.id,
                    error = %err,
                    "ticketing order failed; registration left pending"
                );
                return Err(Self::map_provider_error(&err));
            }
        };

        if let Err(err) = self.registrations.link_order(&record.id, &order_id).await {
            error!(
                registration_id = %record.id,
                order_id = %order_id,
                error = %err,
                "failed to link order to registration"
            );
        } else {
            info!(registration_id = %record.id, order_id = %order_id, "order linked");
        }

        Ok(RegistrationReceipt {
            registration_id: record.id,
            order_id,
        })
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
