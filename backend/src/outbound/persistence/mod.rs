//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types; no business logic lives here.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never cross a port boundary.
//! - **Strongly typed errors**: every database failure maps to a port error
//!   carrying the original message.

mod diesel_error_mapping;
mod diesel_reservation_repository;
mod diesel_user_repository;
mod diesel_workshop_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_reservation_repository::DieselReservationRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use diesel_user_repository::DieselUserRepository;
pub use diesel_workshop_repository::DieselWorkshopRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
