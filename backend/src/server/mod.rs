//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::AppSettings;
pub use state_builders::{Adapters, build_http_state};

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::chat::send_message;
use backend::inbound::http::cors::{chat_preflight, cors_headers, registrations_preflight};
use backend::inbound::http::event::get_event;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::json_config;
use backend::inbound::http::registrations::create_registration;
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Everything the listener needs once adapters are chosen.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: web::Data<HttpState>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state: web::Data::new(http_state),
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .app_data(json_config())
        .service(create_registration)
        .service(registrations_preflight)
        .service(send_message)
        .service(chat_preflight)
        .service(get_event);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors_headers())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and mark the service ready.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        http_state,
    } = config;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::test as actix_test;
    use backend::domain::TRACE_ID_HEADER;
    use backend::domain::ports::FIXTURE_SESSION_TOKEN;
    use rstest::rstest;
    use serde_json::Value;

    async fn fixture_state() -> web::Data<HttpState> {
        let adapters = Adapters::from_settings(&AppSettings::default())
            .await
            .expect("fixture adapters");
        web::Data::new(build_http_state(adapters))
    }

    #[rstest]
    #[actix_web::test]
    async fn unauthenticated_registration_carries_cors_and_trace_headers() {
        let health = web::Data::new(HealthState::new());
        let app = actix_test::init_service(build_app(health, fixture_state().await)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/registrations")
                .set_json(serde_json::json!({}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let headers = response.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
        assert!(headers.contains_key(TRACE_ID_HEADER));
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["code"], "unauthorized");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("text/plain"))]
    #[actix_web::test]
    async fn registration_body_parses_without_a_json_content_type(
        #[case] content_type: Option<&str>,
    ) {
        let health = web::Data::new(HealthState::new());
        let app = actix_test::init_service(build_app(health, fixture_state().await)).await;

        let mut request = actix_test::TestRequest::post()
            .uri("/api/v1/registrations")
            .insert_header((
                header::AUTHORIZATION,
                format!("Bearer {FIXTURE_SESSION_TOKEN}"),
            ))
            .set_payload(
                serde_json::json!({
                    "firstName": "Awa",
                    "lastName": "Koné",
                    "email": "awa@example.ci",
                    "phone": "0747286639",
                    "eventId": "1510",
                    "ticketClassId": "2020",
                })
                .to_string(),
            );
        if let Some(value) = content_type {
            request = request.insert_header((header::CONTENT_TYPE, value));
        }

        let response = actix_test::call_service(&app, request.to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["success"], Value::Bool(true));
    }

    #[rstest]
    #[actix_web::test]
    async fn preflight_and_probes_are_routed() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = actix_test::init_service(build_app(health, fixture_state().await)).await;

        for (request, expected) in [
            (
                actix_test::TestRequest::default()
                    .method(actix_web::http::Method::OPTIONS)
                    .uri("/api/v1/chat")
                    .to_request(),
                StatusCode::OK,
            ),
            (
                actix_test::TestRequest::get()
                    .uri("/health/ready")
                    .to_request(),
                StatusCode::OK,
            ),
            (
                actix_test::TestRequest::get().uri("/api/v1/event").to_request(),
                StatusCode::OK,
            ),
        ] {
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), expected);
        }
    }
}
