//! PostgreSQL persistence adapters built on Diesel.
//!
//! [`DieselRegistrationRepository`] implements the registration store over a
//! `diesel-async` + `bb8` pool. [`InMemoryRegistrationRepository`] stands in
//! when no database is configured. Row structs and the Diesel schema stay
//! private to this module.

mod diesel_error_mapping;
mod diesel_registration_repository;
mod memory_registration_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_registration_repository::DieselRegistrationRepository;
pub use memory_registration_repository::InMemoryRegistrationRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
