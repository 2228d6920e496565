//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod chat_command;
mod chat_completion_source;
mod registration_command;
mod registration_repository;
mod session_provider;
mod ticketing_provider;

pub use chat_command::ChatCommand;
#[cfg(test)]
pub use chat_command::MockChatCommand;
#[cfg(test)]
pub use chat_completion_source::MockChatCompletionSource;
pub use chat_completion_source::{
    ChatCompletionError, ChatCompletionRequest, ChatCompletionSource, FIXTURE_CHAT_REPLY,
    FixtureChatCompletionSource,
};
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::{RegistrationCommand, RegistrationRequest};
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
pub use registration_repository::{RegistrationRepository, RegistrationRepositoryError};
#[cfg(test)]
pub use session_provider::MockSessionProvider;
pub use session_provider::{
    FIXTURE_SESSION_TOKEN, FIXTURE_SESSION_USER_ID, FixtureSessionProvider, SessionProvider,
    SessionProviderError,
};
#[cfg(test)]
pub use ticketing_provider::MockTicketingProvider;
pub use ticketing_provider::{
    FixtureTicketingProvider, GENERIC_ORDER_FAILURE, TicketOrderRequest, TicketingProvider,
    TicketingProviderError,
};
