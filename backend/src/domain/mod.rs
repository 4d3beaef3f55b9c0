//! Domain entities, ports, and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, the transport-agnostic error type, and the
//! reservation use-case services. Inbound and outbound adapters depend on
//! this module; nothing here depends on actix or Diesel.

pub mod error;
pub mod ports;
pub mod reservation;
pub mod reservation_service;
pub mod user;
pub mod users_service;
pub mod workshop;
pub mod workshops_service;

pub use self::error::{Error, ErrorCode};
pub use self::reservation::{
    NewReservation, ParseReservationStatusError, Reservation, ReservationDetail,
    ReservationPatch, ReservationStatus, ReservationSummary,
};
pub use self::reservation_service::{ReservationCommandService, ReservationQueryService};
pub use self::user::User;
pub use self::users_service::UsersQueryService;
pub use self::workshop::Workshop;
pub use self::workshops_service::WorkshopsQueryService;
