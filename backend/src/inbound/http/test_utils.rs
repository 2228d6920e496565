//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

use crate::domain::ports::{ChatCommand, RegistrationCommand};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Clock frozen at a fixed instant.
pub struct FixtureClock {
    pub utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Build handler state around the given driving ports and a frozen clock.
pub fn test_state(
    registrations: impl RegistrationCommand + 'static,
    chat: impl ChatCommand + 'static,
    utc_now: DateTime<Utc>,
) -> HttpState {
    HttpState::new(HttpStatePorts {
        registrations: Arc::new(registrations),
        chat: Arc::new(chat),
        clock: Arc::new(FixtureClock { utc_now }),
    })
}
