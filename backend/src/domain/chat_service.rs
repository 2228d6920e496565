//! Chat relay service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{ChatCommand, ChatCompletionRequest, ChatCompletionSource};
use crate::domain::{CHAT_MAX_TOKENS, CHAT_TEMPERATURE, Error};

/// Forwards visitor messages to the completion source with a fixed persona.
pub struct ChatRelayService<C: ?Sized> {
    source: Arc<C>,
    system_prompt: String,
}

impl<C: ?Sized> ChatRelayService<C> {
    pub fn new(source: Arc<C>, system_prompt: impl Into<String>) -> Self {
        Self {
            source,
            system_prompt: system_prompt.into(),
        }
    }
}

#[async_trait]
impl<C> ChatCommand for ChatRelayService<C>
where
    C: ChatCompletionSource + ?Sized,
{
    async fn reply(&self, message: &str) -> Result<String, Error> {
        if message.trim().is_empty() {
            return Err(Error::invalid_request("chat message must not be empty"));
        }
        let request = ChatCompletionRequest {
            system_prompt: self.system_prompt.clone(),
            user_message: message.to_owned(),
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
        };
        match self.source.complete(&request).await {
            Ok(reply) => {
                info!(reply_chars = reply.chars().count(), "chat reply relayed");
                Ok(reply)
            }
            Err(err) => {
                error!(error = %err, "chat relay failed");
                Err(Error::provider("chat completion failed"))
            }
        }
    }
}
