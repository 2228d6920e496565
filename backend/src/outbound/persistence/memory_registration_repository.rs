//! Process-local [`RegistrationRepository`] used when no database is
//! configured and in behaviour tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{RegistrationRepository, RegistrationRepositoryError};
use crate::domain::{NewRegistration, OrderId, RegistrationId, RegistrationRecord};

/// Registration store backed by a mutex-guarded map.
///
/// Records are lost on restart.
pub struct InMemoryRegistrationRepository {
    records: Mutex<HashMap<RegistrationId, RegistrationRecord>>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Default for InMemoryRegistrationRepository {
    fn default() -> Self {
        Self::with_clock(Box::new(DefaultClock))
    }
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `created_at` from the given clock.
    pub fn with_clock(clock: Box<dyn Clock + Send + Sync>) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Copy of the stored record, if any.
    pub fn get(&self, id: &RegistrationId) -> Option<RegistrationRecord> {
        self.lock().ok()?.get(id).cloned()
    }

    /// Every stored record, oldest first.
    pub fn records(&self) -> Vec<RegistrationRecord> {
        let mut records: Vec<_> = self
            .lock()
            .map(|guard| guard.values().cloned().collect())
            .unwrap_or_default();
        records.sort_by_key(|record| record.created_at);
        records
    }

    fn lock(
        &self,
    ) -> Result<
        std::sync::MutexGuard<'_, HashMap<RegistrationId, RegistrationRecord>>,
        RegistrationRepositoryError,
    > {
        self.records
            .lock()
            .map_err(|_| RegistrationRepositoryError::connection("registration store poisoned"))
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn insert(
        &self,
        registration: &NewRegistration,
    ) -> Result<RegistrationRecord, RegistrationRepositoryError> {
        let mut records = self.lock()?;
        let mut id = RegistrationId::random();
        while records.contains_key(&id) {
            id = RegistrationId::random();
        }
        let record = RegistrationRecord {
            id,
            attendee: registration.attendee.clone(),
            user_id: registration.user_id,
            eventbrite_order_id: None,
            created_at: self.clock.utc(),
        };
        records.insert(id, record.clone());
        Ok(record)
    }

    async fn link_order(
        &self,
        registration_id: &RegistrationId,
        order_id: &OrderId,
    ) -> Result<(), RegistrationRepositoryError> {
        let mut records = self.lock()?;
        let record = records
            .get_mut(registration_id)
            .ok_or_else(|| RegistrationRepositoryError::not_found(registration_id.to_string()))?;
        if record.eventbrite_order_id.is_some() {
            return Err(RegistrationRepositoryError::order_already_linked(
                registration_id.to_string(),
            ));
        }
        record.eventbrite_order_id = Some(order_id.clone());
        Ok(())
    }
}
