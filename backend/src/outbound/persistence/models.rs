//! Diesel row structs. Never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Attendee, NewRegistration, OrderId, RegistrationId, RegistrationRecord, UserId,
};

use super::schema::registrations;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = registrations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegistrationRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub user_id: Option<Uuid>,
    pub eventbrite_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RegistrationRow {
    /// Convert into the domain record.
    ///
    /// An empty stored order id is treated as absent.
    pub fn into_record(self) -> RegistrationRecord {
        RegistrationRecord {
            id: RegistrationId::new(self.id),
            attendee: Attendee {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone: self.phone,
            },
            user_id: self.user_id.map(UserId::from),
            eventbrite_order_id: self
                .eventbrite_order_id
                .and_then(|value| OrderId::new(value).ok()),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = registrations)]
pub(crate) struct NewRegistrationRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub user_id: Option<Uuid>,
}

impl<'a> From<&'a NewRegistration> for NewRegistrationRow<'a> {
    fn from(registration: &'a NewRegistration) -> Self {
        let attendee = &registration.attendee;
        Self {
            first_name: &attendee.first_name,
            last_name: &attendee.last_name,
            email: &attendee.email,
            phone: &attendee.phone,
            user_id: registration.user_id.map(|id| *id.as_uuid()),
        }
    }
}
