//! Wire shapes for the order endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::ports::TicketOrderRequest;

#[derive(Debug, Serialize)]
pub(super) struct CreateOrderDto<'a> {
    pub(super) tickets: Vec<TicketDto<'a>>,
    pub(super) attendees: Vec<AttendeeDto<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct TicketDto<'a> {
    pub(super) ticket_class_id: &'a str,
    pub(super) quantity: u32,
}

#[derive(Debug, Serialize)]
pub(super) struct AttendeeDto<'a> {
    pub(super) ticket_class_id: &'a str,
    pub(super) profile: ProfileDto<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct ProfileDto<'a> {
    pub(super) name: String,
    pub(super) email: &'a str,
    pub(super) cell_phone: &'a str,
}

impl<'a> From<&'a TicketOrderRequest> for CreateOrderDto<'a> {
    fn from(request: &'a TicketOrderRequest) -> Self {
        let ticket_class_id = request.selection.ticket_class_id.as_str();
        Self {
            tickets: vec![TicketDto {
                ticket_class_id,
                quantity: request.quantity,
            }],
            attendees: vec![AttendeeDto {
                ticket_class_id,
                profile: ProfileDto {
                    name: request.attendee.full_name(),
                    email: &request.attendee.email,
                    cell_phone: &request.attendee.phone,
                },
            }],
        }
    }
}

/// Success body. Only the id is read.
#[derive(Debug, Deserialize)]
pub(super) struct OrderCreatedDto {
    #[serde(default)]
    pub(super) id: Option<String>,
}

/// Error body, e.g. `{"error":"INVALID_TICKET_CLASS","error_description":"..."}`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct OrderErrorDto {
    #[serde(default)]
    pub(super) error_description: Option<String>,
}
