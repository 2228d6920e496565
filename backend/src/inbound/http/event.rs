//! Event brief handler.
//!
//! ```text
//! GET /api/v1/event
//! ```

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Countdown, EventBrief, Offer};
use crate::inbound::http::state::HttpState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl From<&Offer> for OfferResponse {
    fn from(offer: &Offer) -> Self {
        Self {
            name: offer.name.to_owned(),
            price: offer.price.to_owned(),
            description: offer.description.to_owned(),
        }
    }
}

/// Time left before the doors open.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountdownResponse {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub started: bool,
}

impl From<Countdown> for CountdownResponse {
    fn from(countdown: Countdown) -> Self {
        Self {
            days: countdown.days,
            hours: countdown.hours,
            minutes: countdown.minutes,
            seconds: countdown.seconds,
            started: countdown.is_elapsed(),
        }
    }
}

/// Event brief with a countdown computed at request time.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[schema(example = "Le Brunch du Baron – Project X")]
    pub name: String,
    #[schema(example = "2025-09-28T14:00:00+00:00")]
    pub starts_at: String,
    pub schedule: String,
    pub venue: String,
    pub starting_price: String,
    pub event_code: String,
    pub contact_phone: String,
    pub whatsapp_url: String,
    pub offers: Vec<OfferResponse>,
    pub highlights: Vec<String>,
    pub countdown: CountdownResponse,
}

impl EventResponse {
    fn new(brief: &EventBrief, countdown: Countdown) -> Self {
        Self {
            name: brief.name.to_owned(),
            starts_at: brief.starts_at.to_rfc3339(),
            schedule: brief.schedule.to_owned(),
            venue: brief.venue.to_owned(),
            starting_price: brief.starting_price.to_owned(),
            event_code: brief.event_code.to_owned(),
            contact_phone: brief.contact_phone.to_owned(),
            whatsapp_url: brief.whatsapp_url.to_owned(),
            offers: brief.offers.iter().map(OfferResponse::from).collect(),
            highlights: brief.highlights.iter().map(|h| (*h).to_owned()).collect(),
            countdown: countdown.into(),
        }
    }
}

/// Fetch the event brief and countdown.
#[utoipa::path(
    get,
    path = "/api/v1/event",
    responses(
        (status = 200, description = "Event brief", body = EventResponse)
    ),
    tags = ["event"],
    operation_id = "getEvent"
)]
#[get("/event")]
pub async fn get_event(state: web::Data<HttpState>) -> HttpResponse {
    let countdown = state.event.countdown(state.clock.utc());
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(EventResponse::new(&state.event, countdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockChatCommand, MockRegistrationCommand};
    use crate::inbound::http::test_utils::test_state;
    use actix_web::{App, test as actix_test};
    use chrono::{DateTime, TimeDelta, Utc};
    use rstest::rstest;

    async fn fetch(now: DateTime<Utc>) -> EventResponse {
        let state = test_state(MockRegistrationCommand::new(), MockChatCommand::new(), now);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(get_event)),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/api/v1/event").to_request();
        actix_test::call_and_read_body_json(&app, request).await
    }

    #[rstest]
    #[actix_web::test]
    async fn counts_down_from_the_frozen_clock() {
        let starts_at = EventBrief::brunch_du_baron().starts_at;
        let now = starts_at - (TimeDelta::days(2) + TimeDelta::hours(3) + TimeDelta::seconds(7));

        let body = fetch(now).await;

        assert_eq!(body.event_code, "1510");
        assert_eq!(body.offers.len(), 2);
        assert_eq!(
            body.countdown,
            CountdownResponse {
                days: 2,
                hours: 3,
                minutes: 0,
                seconds: 7,
                started: false,
            }
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn reports_started_once_past() {
        let starts_at = EventBrief::brunch_du_baron().starts_at;
        let body = fetch(starts_at + TimeDelta::minutes(1)).await;
        assert!(body.countdown.started);
        assert_eq!(body.countdown.days, 0);
    }
}
