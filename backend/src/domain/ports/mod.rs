//! Domain ports: driving use-case traits consumed by inbound adapters, and
//! driven repository traits implemented by outbound adapters.

mod macros;
mod reservation_command;
mod reservation_query;
mod reservation_repository;
mod user_repository;
mod users_query;
mod workshop_repository;
mod workshops_query;

pub(crate) use macros::define_port_error;

pub use reservation_command::ReservationCommand;
pub use reservation_query::ReservationQuery;
pub use reservation_repository::{
    FixtureReservationRepository, ReservationRepository, ReservationRepositoryError,
};
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
pub use users_query::UsersQuery;
pub use workshop_repository::{
    FixtureWorkshopRepository, WorkshopRepository, WorkshopRepositoryError,
};
pub use workshops_query::WorkshopsQuery;

#[cfg(test)]
pub use reservation_command::MockReservationCommand;
#[cfg(test)]
pub use reservation_query::MockReservationQuery;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use users_query::MockUsersQuery;
#[cfg(test)]
pub use workshop_repository::MockWorkshopRepository;
#[cfg(test)]
pub use workshops_query::MockWorkshopsQuery;
