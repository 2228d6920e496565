//! Eventbrite ticketing adapter.
//!
//! Implements [`crate::domain::ports::TicketingProvider`] over the Eventbrite
//! v3 order API.

mod dto;
mod http_provider;

pub use http_provider::EventbriteTicketingProvider;
