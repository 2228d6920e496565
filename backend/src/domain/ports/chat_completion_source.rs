//! Port for the external chat-completion API.

use async_trait::async_trait;

use super::define_port_error;

/// Reply produced by [`FixtureChatCompletionSource`].
pub const FIXTURE_CHAT_REPLY: &str = "Bonjour ! 🎉 Inscris-toi via le formulaire pour obtenir ton ticket GRATUIT pour le Brunch du Baron.";

define_port_error! {
    /// Errors raised by chat completion adapters.
    pub enum ChatCompletionError {
        /// The API answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "chat completion rejected with status {status}: {message}",
        /// Network, TLS or timeout failure.
        Transport { message: String } =>
            "chat completion transport failed: {message}",
        /// The response carried no usable reply.
        Decode { message: String } =>
            "chat completion response was malformed: {message}",
    }
}

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Port for generating assistant replies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletionSource: Send + Sync {
    /// Return the assistant's reply text.
    async fn complete(&self, request: &ChatCompletionRequest)
    -> Result<String, ChatCompletionError>;
}

/// Offline source returning a canned invitation to register.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureChatCompletionSource;

#[async_trait]
impl ChatCompletionSource for FixtureChatCompletionSource {
    async fn complete(
        &self,
        _request: &ChatCompletionRequest,
    ) -> Result<String, ChatCompletionError> {
        Ok(FIXTURE_CHAT_REPLY.to_owned())
    }
}
