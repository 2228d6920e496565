//! Registration data model.
//!
//! A registration is persisted as soon as the form validates and starts in
//! the pending-order state. It moves to order-linked once the ticketing
//! provider has issued an order and the record has been updated. The order
//! identifier is written at most once.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Raw registration payload submitted by the landing page.
///
/// Absent fields deserialise to empty strings so they surface as the
/// matching field validation message rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_id: String,
    pub ticket_class_id: String,
}

/// Personal details of the attendee, copied verbatim from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Attendee {
    /// Name sent to the ticketing provider's attendee profile.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Attendee;
    ///
    /// let attendee = Attendee {
    ///     first_name: "Awa".into(),
    ///     last_name: "Koné".into(),
    ///     email: "awa@example.ci".into(),
    ///     phone: "+2250747286639".into(),
    /// };
    /// assert_eq!(attendee.full_name(), "Awa Koné");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Domain part of the email address, safe to include in logs.
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map_or("", |(_, domain)| domain)
    }
}

/// Ticketing provider event and ticket class chosen by the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSelection {
    pub event_id: String,
    pub ticket_class_id: String,
}

/// Form contents after every field check has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub attendee: Attendee,
    pub selection: TicketSelection,
}

/// Store-assigned identifier of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(Uuid);

impl RegistrationId {
    /// Wrap an identifier issued by the store.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh identifier for stores that do not assign their own.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors returned when constructing an [`OrderId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderIdValidationError {
    #[error("order id must not be empty")]
    Empty,
}

/// Order identifier issued by the ticketing provider.
///
/// # Examples
/// ```
/// use backend::domain::OrderId;
///
/// let order = OrderId::new("1234567890").expect("valid order id");
/// assert_eq!(order.as_str(), "1234567890");
/// assert!(OrderId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Result<Self, OrderIdValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(OrderIdValidationError::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for OrderId {
    type Error = OrderIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

/// Registration awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub attendee: Attendee,
    pub user_id: Option<UserId>,
}

/// Lifecycle stage derived from the stored order link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    PendingOrder,
    OrderLinked,
}

/// Registration as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub id: RegistrationId,
    pub attendee: Attendee,
    pub user_id: Option<UserId>,
    pub eventbrite_order_id: Option<OrderId>,
    pub created_at: DateTime<Utc>,
}

impl RegistrationRecord {
    pub fn status(&self) -> RegistrationStatus {
        match self.eventbrite_order_id {
            Some(_) => RegistrationStatus::OrderLinked,
            None => RegistrationStatus::PendingOrder,
        }
    }
}

/// Identifiers returned to the caller after a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub registration_id: RegistrationId,
    pub order_id: OrderId,
}
