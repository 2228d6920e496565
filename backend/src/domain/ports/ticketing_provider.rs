//! Port for creating orders with the external ticketing provider.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Attendee, OrderId, TicketSelection};

use super::define_port_error;

/// Message used when the provider gives no usable description.
pub const GENERIC_ORDER_FAILURE: &str = "failed to create the ticketing order";

define_port_error! {
    /// Errors raised by ticketing provider adapters.
    pub enum TicketingProviderError {
        /// The provider answered with a non-success status.
        Rejected { status: u16, description: Option<String> } =>
            "ticketing provider rejected the order with status {status}",
        /// The request did not complete in time.
        Timeout { message: String } =>
            "ticketing provider request timed out: {message}",
        /// Network or TLS failure before a response arrived.
        Transport { message: String } =>
            "ticketing provider transport failed: {message}",
        /// The success response could not be understood.
        Decode { message: String } =>
            "ticketing provider response was malformed: {message}",
    }
}

impl TicketingProviderError {
    /// Message suitable for the visitor: the provider's own description when
    /// it sent one, a generic failure otherwise.
    pub fn visitor_message(&self) -> &str {
        match self {
            Self::Rejected {
                description: Some(description),
                ..
            } if !description.trim().is_empty() => description.as_str(),
            _ => GENERIC_ORDER_FAILURE,
        }
    }
}

/// A single-attendee order for one ticket class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketOrderRequest {
    pub selection: TicketSelection,
    pub attendee: Attendee,
    pub quantity: u32,
}

impl TicketOrderRequest {
    /// Order exactly one ticket for the attendee.
    pub fn single(selection: TicketSelection, attendee: Attendee) -> Self {
        Self {
            selection,
            attendee,
            quantity: 1,
        }
    }
}

/// Port for the third-party order-creation API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketingProvider: Send + Sync {
    /// Create an order and return the provider-issued identifier.
    async fn create_order(
        &self,
        request: &TicketOrderRequest,
    ) -> Result<OrderId, TicketingProviderError>;
}

/// Development provider that issues local order ids without any network
/// call.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketingProvider;

#[async_trait]
impl TicketingProvider for FixtureTicketingProvider {
    async fn create_order(
        &self,
        _request: &TicketOrderRequest,
    ) -> Result<OrderId, TicketingProviderError> {
        OrderId::new(format!("fixture-{}", Uuid::new_v4().simple()))
            .map_err(|err| TicketingProviderError::decode(err.to_string()))
    }
}
