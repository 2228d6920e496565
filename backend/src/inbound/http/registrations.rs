//! Registration submission handler.
//!
//! ```text
//! POST /api/v1/registrations
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::RegistrationRequest;
use crate::domain::{BearerToken, RegistrationForm, RegistrationReceipt};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RegistrationFormSchema};
use crate::inbound::http::state::HttpState;

/// Confirmation shown once the ticket has been issued.
pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Inscription réussie ! Votre ticket Eventbrite a été créé.";

/// Success payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    /// Always `true`.
    pub success: bool,
    #[schema(example = "Inscription réussie ! Votre ticket Eventbrite a été créé.")]
    pub message: String,
    /// Ticketing provider order identifier.
    #[schema(example = "1234567890")]
    pub order_id: String,
    /// Stored registration identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub registration_id: String,
}

impl From<RegistrationReceipt> for RegistrationResponse {
    fn from(receipt: RegistrationReceipt) -> Self {
        Self {
            success: true,
            message: REGISTRATION_SUCCESS_MESSAGE.to_owned(),
            order_id: receipt.order_id.into(),
            registration_id: receipt.registration_id.to_string(),
        }
    }
}

/// Register the authenticated visitor and issue their ticket.
///
/// An unreadable body is passed on as `None` so a missing credential is
/// still reported first.
#[utoipa::path(
    post,
    path = "/api/v1/registrations",
    request_body = RegistrationFormSchema,
    params(
        ("Authorization" = String, Header, description = "Bearer session token")
    ),
    responses(
        (status = 200, description = "Registration stored and order created", body = RegistrationResponse),
        (status = 400, description = "Invalid payload or field", body = ErrorSchema),
        (status = 401, description = "Missing or rejected credential", body = ErrorSchema),
        (status = 500, description = "Store or ticketing provider failure", body = ErrorSchema)
    ),
    tags = ["registrations"],
    operation_id = "createRegistration"
)]
#[post("/registrations")]
pub async fn create_registration(
    state: web::Data<HttpState>,
    credential: Option<BearerToken>,
    payload: Option<web::Json<RegistrationForm>>,
) -> ApiResult<HttpResponse> {
    let receipt = state
        .registrations
        .register(RegistrationRequest {
            credential,
            form: payload.map(web::Json::into_inner),
        })
        .await?;
    Ok(HttpResponse::Ok().json(RegistrationResponse::from(receipt)))
}

#[cfg(test)]
#[path = "registrations_tests.rs"]
mod tests;
