//! OpenAI-compatible chat completion adapter.

mod dto;
mod http_source;

pub use http_source::OpenAiChatSource;
