//! Domain primitives, services and ports.
//!
//! Purpose: hold the registration flow and chat relay independently of
//! actix, Diesel or any HTTP client. Adapters plug in through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - RegistrationForm, RegistrationRecord and friends: registration model.
//! - validate_name / validate_email / validate_phone / validate_form.
//! - RegistrationService: the submission flow behind `RegistrationCommand`.
//! - ChatRelayService: the persona relay behind `ChatCommand`.
//! - EventBrief / Countdown: fixed event facts and time-to-start.

pub mod auth;
pub mod chat;
pub mod chat_service;
pub mod error;
pub mod event;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::auth::{BEARER_PREFIX, BearerToken, BearerTokenError};
pub use self::chat::{
    CHAT_FALLBACK_APOLOGY, CHAT_FALLBACK_ERROR, CHAT_MAX_TOKENS, CHAT_TEMPERATURE,
    chat_system_prompt,
};
pub use self::chat_service::ChatRelayService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::event::{Countdown, EventBrief, Offer};
pub use self::registration::{
    Attendee, NewRegistration, OrderId, OrderIdValidationError, RegistrationForm, RegistrationId,
    RegistrationReceipt, RegistrationRecord, RegistrationStatus, TicketSelection,
    ValidatedRegistration,
};
pub use self::registration_service::{
    INVALID_CREDENTIAL_MESSAGE, MALFORMED_PAYLOAD_MESSAGE, MISSING_CREDENTIAL_MESSAGE,
    RegistrationService, STORE_FAILURE_MESSAGE,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserIdValidationError};
pub use self::validation::{
    NAME_MAX_CHARS, NAME_MIN_CHARS, RegistrationFieldError, validate_email, validate_form,
    validate_name, validate_phone,
};
