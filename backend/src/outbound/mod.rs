//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL registration store using Diesel, plus an
//!   in-memory store for development
//! - **eventbrite**: ticketing orders over HTTP
//! - **supabase**: session token resolution against the identity service
//! - **openai**: chat completions
//!
//! Adapters translate between domain types and wire formats. They contain no
//! business logic.

pub mod eventbrite;
mod http_support;
pub mod openai;
pub mod persistence;
pub mod supabase;
