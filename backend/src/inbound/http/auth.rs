//! Bearer credential extraction.
//!
//! Handlers take `Option<BearerToken>` so a missing header reaches the
//! domain service as `None` instead of short-circuiting in actix.

use std::future::{Ready, ready};

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::domain::{BearerToken, Error, MISSING_CREDENTIAL_MESSAGE};

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| BearerToken::from_header_value(value).ok())
            .ok_or_else(|| Error::unauthorized(MISSING_CREDENTIAL_MESSAGE));
        ready(token)
    }
}
