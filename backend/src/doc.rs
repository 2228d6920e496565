//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the registration, chat, event and health endpoints
//! plus the schema wrappers from [`crate::inbound::http::schemas`]. Swagger
//! UI serves it in debug builds and `openapi-dump` prints it for tooling.

use crate::inbound::http::chat::{ChatFallbackResponse, ChatRequest, ChatResponse};
use crate::inbound::http::event::{CountdownResponse, EventResponse, OfferResponse};
use crate::inbound::http::registrations::RegistrationResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, RegistrationFormSchema};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the bearer session token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerSession",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Session token issued by the identity service."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the landing page API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Brunch backend API",
        description = "Registration, ticketing and chat endpoints behind the event landing page."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registrations::create_registration,
        crate::inbound::http::cors::registrations_preflight,
        crate::inbound::http::chat::send_message,
        crate::inbound::http::cors::chat_preflight,
        crate::inbound::http::event::get_event,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RegistrationFormSchema,
        RegistrationResponse,
        ChatRequest,
        ChatResponse,
        ChatFallbackResponse,
        EventResponse,
        OfferResponse,
        CountdownResponse,
    )),
    tags(
        (name = "registrations", description = "Visitor registration and ticket issuance"),
        (name = "chat", description = "Event assistant relay"),
        (name = "event", description = "Event brief and countdown"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
