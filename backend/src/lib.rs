//! Backend behind the event landing page.
//!
//! Hexagonal layout: [`domain`] holds the registration flow and chat relay,
//! [`inbound`] adapts actix-web requests onto it and [`outbound`] talks to
//! PostgreSQL, the ticketing provider, the identity service and the
//! completion API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
