//! Port for the registration store.
//!
//! The store assigns identifiers on insert and holds each record's
//! ticketing order link. The link is write-once: adapters refuse to
//! overwrite an order id that is already set.

use async_trait::async_trait;

use crate::domain::{NewRegistration, OrderId, RegistrationId, RegistrationRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by registration repository adapters.
    pub enum RegistrationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "registration repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "registration repository query failed: {message}",
        /// The record already carries an order id.
        OrderAlreadyLinked { registration_id: String } =>
            "registration {registration_id} is already linked to an order",
        /// No record exists for the identifier.
        NotFound { registration_id: String } =>
            "registration {registration_id} was not found",
    }
}

/// Port for registration storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persist a new registration in the pending-order state and return the
    /// stored record with its generated id.
    async fn insert(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord, RegistrationRepositoryError>;

    /// Attach the provider's order id to an existing registration.
    ///
    /// Fails with [`RegistrationRepositoryError::OrderAlreadyLinked`] when
    /// the record already has one.
    async fn link_order(
        &self,
        registration_id: &RegistrationId,
        order_id: &OrderId,
    ) -> Result<(), RegistrationRepositoryError>;
}
