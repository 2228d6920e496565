//! PostgreSQL-backed [`RegistrationRepository`].
//!
//! Inserts return the generated row. Linking an order is a conditional
//! update guarded by `eventbrite_order_id IS NULL`; when it touches no row
//! a follow-up lookup tells a missing record apart from one already linked.

use async_trait::async_trait;
use diesel::dsl;
use diesel::prelude::*;
use diesel::result::QueryResult;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{RegistrationRepository, RegistrationRepositoryError};
use crate::domain::{NewRegistration, OrderId, RegistrationId, RegistrationRecord};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRegistrationRow, RegistrationRow};
use super::pool::{DbConnection, DbPool};
use super::schema::registrations;

/// Diesel implementation of the registration store.
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    pool: DbPool,
}

impl DieselRegistrationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type UnlinkedRegistration = dsl::Filter<
    dsl::Filter<registrations::table, dsl::Eq<registrations::id, Uuid>>,
    dsl::IsNull<registrations::eventbrite_order_id>,
>;

type LinkOrderStatement<'a> =
    dsl::Update<UnlinkedRegistration, dsl::Eq<registrations::eventbrite_order_id, &'a str>>;

/// Write-once update: matches the row only while it has no order.
fn link_order_statement<'a>(
    registration_id: &RegistrationId,
    order_id: &'a OrderId,
) -> LinkOrderStatement<'a> {
    diesel::update(
        registrations::table
            .filter(registrations::id.eq(*registration_id.as_uuid()))
            .filter(registrations::eventbrite_order_id.is_null()),
    )
    .set(registrations::eventbrite_order_id.eq(order_id.as_str()))
}

fn unlinked_error(
    lookup: QueryResult<Option<Uuid>>,
    registration_id: &RegistrationId,
) -> RegistrationRepositoryError {
    match lookup {
        Ok(Some(_)) => RegistrationRepositoryError::order_already_linked(registration_id.to_string()),
        Ok(None) => RegistrationRepositoryError::not_found(registration_id.to_string()),
        Err(err) => map_diesel_error(err),
    }
}

async fn explain_unlinked(
    conn: &mut DbConnection<'_>,
    registration_id: &RegistrationId,
) -> RegistrationRepositoryError {
    let existing = registrations::table
        .filter(registrations::id.eq(registration_id.as_uuid()))
        .select(registrations::id)
        .first::<Uuid>(conn)
        .await
        .optional();

    unlinked_error(existing, registration_id)
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn insert(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: RegistrationRow = diesel::insert_into(registrations::table)
            .values(NewRegistrationRow::from(registration))
            .returning(RegistrationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(registration_id = %row.id, "registration row inserted");
        Ok(row.into_record())
    }

    async fn link_order(
        &self,
        registration_id: &RegistrationId,
        order_id: &OrderId,
    ) -> Result<(), RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = link_order_statement(registration_id, order_id)
            .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if updated == 1 {
            return Ok(());
        }
        Err(explain_unlinked(&mut conn, registration_id).await)
    }
}
