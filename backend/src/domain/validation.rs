//! Field checks applied to the registration form.
//!
//! The individual predicates are pure. [`validate_form`] runs them in form
//! order and stops at the first failing field.

use std::sync::OnceLock;

use regex::Regex;

use super::{Attendee, RegistrationForm, TicketSelection, ValidatedRegistration};

/// Minimum number of characters in a trimmed first or last name.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum number of characters in a trimmed first or last name.
pub const NAME_MAX_CHARS: usize = 50;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // International form, or a national number behind a single 0 trunk
        // prefix. Either way at most 16 digits.
        Regex::new(r"^(?:\+?[1-9][0-9]{0,15}|0[1-9][0-9]{0,14})$")
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// Field-level reasons a registration form is rejected.
///
/// `Display` yields the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationFieldError {
    #[error("First name must be between 2 and 50 characters")]
    FirstName,
    #[error("Last name must be between 2 and 50 characters")]
    LastName,
    #[error("Please provide a valid email address")]
    Email,
    #[error("Please provide a valid phone number")]
    Phone,
    #[error("Event identifier is required")]
    EventId,
    #[error("Ticket class identifier is required")]
    TicketClassId,
}

impl RegistrationFieldError {
    /// Form field name, as spelled in the JSON payload.
    pub fn field(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::EventId => "eventId",
            Self::TicketClassId => "ticketClassId",
        }
    }

    /// Machine-readable failure kind.
    pub fn code(self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName => "invalid_length",
            Self::Email => "invalid_email",
            Self::Phone => "invalid_phone",
            Self::EventId | Self::TicketClassId => "invalid_identifier",
        }
    }
}

/// True when the trimmed name holds between 2 and 50 characters.
///
/// # Examples
/// ```
/// use backend::domain::validate_name;
///
/// assert!(validate_name("  Jo  "));
/// assert!(!validate_name(" J "));
/// ```
pub fn validate_name(name: &str) -> bool {
    let length = name.trim().chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length)
}

/// True for `local@domain.tld` shaped addresses without whitespace or a
/// second `@`.
///
/// # Examples
/// ```
/// use backend::domain::validate_email;
///
/// assert!(validate_email("a@b.co"));
/// assert!(!validate_email("a@@b.co"));
/// ```
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// True for phone numbers once all whitespace has been removed.
///
/// # Examples
/// ```
/// use backend::domain::validate_phone;
///
/// assert!(validate_phone("+2250747286639"));
/// assert!(validate_phone("07 47 28 66 39"));
/// assert!(!validate_phone("abc123"));
/// ```
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    phone_regex().is_match(&compact)
}

/// Provider identifiers end up in a URL path, so only ASCII alphanumerics
/// are accepted.
fn validate_identifier(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check every field in order, failing fast on the first rejection.
pub fn validate_form(form: RegistrationForm) -> Result<ValidatedRegistration, RegistrationFieldError> {
    let checks = [
        (validate_name(&form.first_name), RegistrationFieldError::FirstName),
        (validate_name(&form.last_name), RegistrationFieldError::LastName),
        (validate_email(&form.email), RegistrationFieldError::Email),
        (validate_phone(&form.phone), RegistrationFieldError::Phone),
        (validate_identifier(form.event_id.trim()), RegistrationFieldError::EventId),
        (
            validate_identifier(form.ticket_class_id.trim()),
            RegistrationFieldError::TicketClassId,
        ),
    ];
    if let Some((_, failure)) = checks.into_iter().find(|(passed, _)| !passed) {
        return Err(failure);
    }

    let RegistrationForm {
        first_name,
        last_name,
        email,
        phone,
        event_id,
        ticket_class_id,
    } = form;
    Ok(ValidatedRegistration {
        attendee: Attendee {
            first_name,
            last_name,
            email,
            phone,
        },
        selection: TicketSelection {
            event_id: event_id.trim().to_owned(),
            ticket_class_id: ticket_class_id.trim().to_owned(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Awa".into(),
            last_name: "Koné".into(),
            email: "awa@example.ci".into(),
            phone: "+225 07 47 28 66 39".into(),
            event_id: "1510".into(),
            ticket_class_id: "2020".into(),
        }
    }

    #[fixture]
    fn valid_form() -> RegistrationForm {
        form()
    }

    #[rstest]
    fn name_bounds_hold_for_every_length() {
        for length in 0..=60 {
            let name = "é".repeat(length);
            let expected = (2..=50).contains(&length);
            assert_eq!(validate_name(&name), expected, "length {length}");
            assert_eq!(validate_name(&format!("  {name}  ")), expected, "padded {length}");
        }
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("first.last@sub.example.ci", true)]
    #[case("a@@b.co", false)]
    #[case("a b@c.co", false)]
    #[case("abc", false)]
    #[case("a@bco", false)]
    #[case("@b.co", false)]
    fn email_shape(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(validate_email(email), expected);
    }

    #[rstest]
    #[case("+2250747286639", true)]
    #[case("0747286639", true)]
    #[case("0 747 286 639", true)]
    #[case("747286639", true)]
    #[case("+1", true)]
    #[case("1234567890123456", true)]
    #[case("12345678901234567", false)]
    #[case("abc123", false)]
    #[case("+0747286639", false)]
    #[case("00", false)]
    #[case("", false)]
    #[case("+", false)]
    #[case("07-47-28-66-39", false)]
    fn phone_shape(#[case] phone: &str, #[case] expected: bool) {
        assert_eq!(validate_phone(phone), expected);
    }

    #[rstest]
    fn valid_form_passes(valid_form: RegistrationForm) {
        let validated = validate_form(valid_form).expect("form is valid");
        assert_eq!(validated.attendee.full_name(), "Awa Koné");
        assert_eq!(validated.selection.event_id, "1510");
        assert_eq!(validated.attendee.phone, "+225 07 47 28 66 39");
    }

    #[rstest]
    fn first_failing_field_wins(valid_form: RegistrationForm) {
        let form = RegistrationForm {
            last_name: "K".into(),
            email: "nope".into(),
            phone: "abc".into(),
            ..valid_form
        };
        assert_eq!(validate_form(form), Err(RegistrationFieldError::LastName));
    }

    #[rstest]
    #[case::first_name(RegistrationForm { first_name: " ".into(), ..form() }, RegistrationFieldError::FirstName)]
    #[case::email(RegistrationForm { email: "a b@c.co".into(), ..form() }, RegistrationFieldError::Email)]
    #[case::phone(RegistrationForm { phone: "abc123".into(), ..form() }, RegistrationFieldError::Phone)]
    #[case::event(RegistrationForm { event_id: "../admin".into(), ..form() }, RegistrationFieldError::EventId)]
    #[case::ticket(RegistrationForm { ticket_class_id: String::new(), ..form() }, RegistrationFieldError::TicketClassId)]
    fn reports_field_specific_failures(
        #[case] form: RegistrationForm,
        #[case] expected: RegistrationFieldError,
    ) {
        assert_eq!(validate_form(form), Err(expected));
    }

    #[rstest]
    fn field_errors_name_payload_fields() {
        assert_eq!(RegistrationFieldError::TicketClassId.field(), "ticketClassId");
        assert_eq!(RegistrationFieldError::Phone.code(), "invalid_phone");
        assert_eq!(
            RegistrationFieldError::FirstName.to_string(),
            "First name must be between 2 and 50 characters"
        );
    }
}
