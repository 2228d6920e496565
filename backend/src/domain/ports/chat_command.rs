//! Driving port for the chat relay.

use async_trait::async_trait;

use crate::domain::Error;

/// Use-case port answering a visitor's chat message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCommand: Send + Sync {
    /// Forward the message with the event persona and return the reply text.
    async fn reply(&self, message: &str) -> Result<String, Error>;
}
