//! Eventbrite adapter behaviour against a stubbed API.

use std::time::Duration;

use rstest::{fixture, rstest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::domain::{Attendee, TicketSelection};

const API_KEY: &str = "eventbrite-test-key";

#[fixture]
fn order_request() -> TicketOrderRequest {
    TicketOrderRequest::single(
        TicketSelection {
            event_id: "1510".into(),
            ticket_class_id: "2020".into(),
        },
        Attendee {
            first_name: "Awa".into(),
            last_name: "Koné".into(),
            email: "awa@example.ci".into(),
            phone: "0747286639".into(),
        },
    )
}

fn provider(server: &MockServer, timeout: Duration) -> EventbriteTicketingProvider {
    let api_url = Url::parse(&format!("{}/v3", server.uri())).expect("mock server url");
    EventbriteTicketingProvider::new(api_url, API_KEY, timeout).expect("client builds")
}

#[rstest]
#[tokio::test]
async fn posts_one_ticket_and_returns_the_order_id(order_request: TicketOrderRequest) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/events/1510/orders/"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(body_json(json!({
            "tickets": [{ "ticket_class_id": "2020", "quantity": 1 }],
            "attendees": [{
                "ticket_class_id": "2020",
                "profile": {
                    "name": "Awa Koné",
                    "email": "awa@example.ci",
                    "cell_phone": "0747286639"
                }
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "1234567890" })))
        .expect(1)
        .mount(&server)
        .await;

    let order_id = provider(&server, Duration::from_secs(5))
        .create_order(&order_request)
        .await
        .expect("order created");

    assert_eq!(order_id.as_str(), "1234567890");
}

#[rstest]
#[case::described(400, json!({ "error": "INVALID", "error_description": "The ticket class is sold out" }), Some("The ticket class is sold out"))]
#[case::undescribed(500, json!({ "error": "INTERNAL" }), None)]
#[case::blank_description(403, json!({ "error_description": "   " }), None)]
#[tokio::test]
async fn non_success_is_a_rejection(
    order_request: TicketOrderRequest,
    #[case] status: u16,
    #[case] body: serde_json::Value,
    #[case] description: Option<&str>,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;

    let error = provider(&server, Duration::from_secs(5))
        .create_order(&order_request)
        .await
        .expect_err("order rejected");

    assert_eq!(
        error,
        TicketingProviderError::rejected(status, description.map(str::to_owned))
    );
}

#[rstest]
#[case::missing_id(json!({ "status": "placed" }))]
#[case::empty_id(json!({ "id": "" }))]
#[case::numeric_id(json!({ "id": 42 }))]
#[tokio::test]
async fn success_without_usable_id_is_a_decode_error(
    order_request: TicketOrderRequest,
    #[case] body: serde_json::Value,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let error = provider(&server, Duration::from_secs(5))
        .create_order(&order_request)
        .await
        .expect_err("malformed response");

    assert!(matches!(error, TicketingProviderError::Decode { .. }));
}

#[rstest]
#[tokio::test]
async fn slow_provider_times_out(order_request: TicketOrderRequest) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "late" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let error = provider(&server, Duration::from_millis(50))
        .create_order(&order_request)
        .await
        .expect_err("request timed out");

    assert!(matches!(error, TicketingProviderError::Timeout { .. }));
}

#[rstest]
#[tokio::test]
async fn unreachable_provider_is_a_transport_error(order_request: TicketOrderRequest) {
    let api_url = Url::parse("http://127.0.0.1:9/v3").expect("url");
    let provider =
        EventbriteTicketingProvider::new(api_url, API_KEY, Duration::from_secs(2)).expect("client");

    let error = provider
        .create_order(&order_request)
        .await
        .expect_err("connection refused");

    assert!(matches!(
        error,
        TicketingProviderError::Transport { .. } | TicketingProviderError::Timeout { .. }
    ));
}
