//! Identity-service adapter resolving session tokens via Supabase Auth.

mod dto;
mod http_session_provider;

pub use http_session_provider::SupabaseSessionProvider;
