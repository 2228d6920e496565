//! Reqwest-backed Eventbrite order creation.
//!
//! Owns transport only: request body shape, bearer authentication, status
//! mapping and decoding the order id.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{CreateOrderDto, OrderCreatedDto, OrderErrorDto};
use crate::domain::OrderId;
use crate::domain::ports::{TicketOrderRequest, TicketingProvider, TicketingProviderError};
use crate::outbound::http_support::{body_preview, client_with_timeout, join_segments};

/// Ticketing provider calling `POST {api_url}/events/{event_id}/orders/`.
pub struct EventbriteTicketingProvider {
    client: Client,
    api_url: Url,
    api_key: Zeroizing<String>,
}

impl EventbriteTicketingProvider {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        api_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: client_with_timeout(timeout)?,
            api_url,
            api_key: Zeroizing::new(api_key.into()),
        })
    }

    fn orders_url(&self, event_id: &str) -> Result<Url, TicketingProviderError> {
        join_segments(&self.api_url, &["events", event_id, "orders", ""]).ok_or_else(|| {
            TicketingProviderError::transport("ticketing API URL cannot carry a path")
        })
    }
}

#[async_trait]
impl TicketingProvider for EventbriteTicketingProvider {
    async fn create_order(
        &self,
        request: &TicketOrderRequest,
    ) -> Result<OrderId, TicketingProviderError> {
        let url = self.orders_url(&request.selection.event_id)?;
        let response = self
            .client
            .post(url)
            .bearer_auth(self.api_key.as_str())
            .json(&CreateOrderDto::from(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            debug!(
                status = status.as_u16(),
                body = %body_preview(&body),
                "ticketing provider rejected order"
            );
            return Err(rejection(status.as_u16(), &body));
        }
        parse_order_id(&body)
    }
}

fn rejection(status: u16, body: &[u8]) -> TicketingProviderError {
    let description = serde_json::from_slice::<OrderErrorDto>(body)
        .unwrap_or_default()
        .error_description
        .filter(|text| !text.trim().is_empty());
    TicketingProviderError::rejected(status, description)
}

fn parse_order_id(body: &[u8]) -> Result<OrderId, TicketingProviderError> {
    let decoded: OrderCreatedDto = serde_json::from_slice(body).map_err(|err| {
        TicketingProviderError::decode(format!("invalid order JSON payload: {err}"))
    })?;
    let id = decoded
        .id
        .ok_or_else(|| TicketingProviderError::decode("order response has no id"))?;
    OrderId::new(id).map_err(|err| TicketingProviderError::decode(err.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> TicketingProviderError {
    if error.is_timeout() {
        TicketingProviderError::timeout(error.to_string())
    } else {
        TicketingProviderError::transport(error.to_string())
    }
}

#[cfg(test)]
#[path = "http_provider_tests.rs"]
mod tests;
