//! Chat relay handler.
//!
//! ```text
//! POST /api/v1/chat
//! ```
//!
//! Any failure, including an unreadable body, answers `500` with the French
//! apology so the chat widget always has something to display.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CHAT_FALLBACK_APOLOGY, CHAT_FALLBACK_ERROR};
use crate::inbound::http::state::HttpState;

/// Visitor message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "C'est quand le brunch ?")]
    pub message: String,
}

/// Assistant reply.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub message: String,
}

/// Failure payload carrying the apology to display.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatFallbackResponse {
    #[schema(example = "Une erreur est survenue. Veuillez réessayer.")]
    pub error: String,
    pub message: String,
}

impl ChatFallbackResponse {
    fn apology() -> Self {
        Self {
            error: CHAT_FALLBACK_ERROR.to_owned(),
            message: CHAT_FALLBACK_APOLOGY.to_owned(),
        }
    }
}

/// Relay a message to the event assistant.
#[utoipa::path(
    post,
    path = "/api/v1/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 500, description = "Relay failed; apology included", body = ChatFallbackResponse)
    ),
    tags = ["chat"],
    operation_id = "sendChatMessage"
)]
#[post("/chat")]
pub async fn send_message(
    state: web::Data<HttpState>,
    payload: Option<web::Json<ChatRequest>>,
) -> HttpResponse {
    let Some(payload) = payload else {
        return HttpResponse::InternalServerError().json(ChatFallbackResponse::apology());
    };
    match state.chat.reply(&payload.message).await {
        Ok(message) => HttpResponse::Ok().json(ChatResponse { message }),
        Err(_) => HttpResponse::InternalServerError().json(ChatFallbackResponse::apology()),
    }
}
