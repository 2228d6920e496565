//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only ever see driving ports,
//! so they stay testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::EventBrief;
use crate::domain::ports::{ChatCommand, RegistrationCommand};

/// Parameter object bundling the port implementations for handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub registrations: Arc<dyn RegistrationCommand>,
    pub chat: Arc<dyn ChatCommand>,
    pub clock: Arc<dyn Clock>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registrations: Arc<dyn RegistrationCommand>,
    pub chat: Arc<dyn ChatCommand>,
    pub clock: Arc<dyn Clock>,
    pub event: Arc<EventBrief>,
}

impl HttpState {
    /// Build state for the advertised event.
    pub fn new(ports: HttpStatePorts) -> Self {
        Self::with_event(ports, EventBrief::brunch_du_baron())
    }

    /// Build state for an explicit event brief.
    pub fn with_event(ports: HttpStatePorts, event: EventBrief) -> Self {
        let HttpStatePorts {
            registrations,
            chat,
            clock,
        } = ports;
        Self {
            registrations,
            chat,
            clock,
            event: Arc::new(event),
        }
    }
}
