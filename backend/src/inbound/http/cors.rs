//! Open-origin CORS headers and preflight answers.
//!
//! The landing page is served from a different origin than the API, so
//! every response carries the same permissive header pair and `OPTIONS`
//! preflights answer `200` with an empty body.

use actix_web::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpResponse, options};

/// Origins allowed to call the API.
pub const ALLOWED_ORIGIN: &str = "*";
/// Request headers the landing page may send.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Middleware stamping the CORS headers on every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
}

fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Preflight for the registration endpoint.
#[utoipa::path(
    options,
    path = "/api/v1/registrations",
    tags = ["registrations"],
    responses((status = 200, description = "CORS preflight accepted"))
)]
#[options("/registrations")]
pub async fn registrations_preflight() -> HttpResponse {
    preflight()
}

/// Preflight for the chat endpoint.
#[utoipa::path(
    options,
    path = "/api/v1/chat",
    tags = ["chat"],
    responses((status = 200, description = "CORS preflight accepted"))
)]
#[options("/chat")]
pub async fn chat_preflight() -> HttpResponse {
    preflight()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web};
    use rstest::rstest;

    #[rstest]
    #[case("/api/v1/registrations")]
    #[case("/api/v1/chat")]
    #[actix_web::test]
    async fn preflight_answers_with_open_headers(#[case] uri: &str) {
        let app = test::init_service(
            App::new().wrap(cors_headers()).service(
                web::scope("/api/v1")
                    .service(registrations_preflight)
                    .service(chat_preflight),
            ),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::default()
                .method(actix_web::http::Method::OPTIONS)
                .uri(uri)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some(ALLOWED_ORIGIN)
        );
        assert_eq!(
            res.headers()
                .get(ACCESS_CONTROL_ALLOW_HEADERS)
                .and_then(|value| value.to_str().ok()),
            Some(ALLOWED_HEADERS)
        );
        let body = test::read_body(res).await;
        assert!(body.is_empty());
    }
}
