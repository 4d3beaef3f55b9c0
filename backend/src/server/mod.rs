//! Server assembly: port wiring and the actix application factory.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{
    FixtureReservationRepository, FixtureUserRepository, FixtureWorkshopRepository,
};
use crate::domain::{
    ReservationCommandService, ReservationQueryService, UsersQueryService, WorkshopsQueryService,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::reservations::{
    create_reservation, delete_reservation, get_reservation, list_reservation_summaries,
    update_reservation,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::list_users;
use crate::inbound::http::workshops::list_workshops;
use crate::middleware::Trace;
use crate::outbound::persistence::{
    DieselReservationRepository, DieselUserRepository, DieselWorkshopRepository,
};

/// Wire the HTTP state from the configured pool, falling back to fixture
/// adapters when no database is attached.
#[must_use]
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    config.db_pool.as_ref().map_or_else(
        || {
            let reservation_repo = Arc::new(FixtureReservationRepository);
            HttpState::new(
                Arc::new(ReservationCommandService::new(Arc::clone(&reservation_repo))),
                Arc::new(ReservationQueryService::new(reservation_repo)),
                Arc::new(UsersQueryService::new(Arc::new(FixtureUserRepository))),
                Arc::new(WorkshopsQueryService::new(Arc::new(
                    FixtureWorkshopRepository,
                ))),
            )
        },
        |pool| {
            let reservation_repo = Arc::new(DieselReservationRepository::new(pool.clone()));
            HttpState::new(
                Arc::new(ReservationCommandService::new(Arc::clone(&reservation_repo))),
                Arc::new(ReservationQueryService::new(reservation_repo)),
                Arc::new(UsersQueryService::new(Arc::new(DieselUserRepository::new(
                    pool.clone(),
                )))),
                Arc::new(WorkshopsQueryService::new(Arc::new(
                    DieselWorkshopRepository::new(pool.clone()),
                ))),
            )
        },
    )
}

/// Run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns an error when the listener cannot bind or the server fails while
/// running.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(build_http_state(&config));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let api = web::scope("/api")
            .service(create_reservation)
            .service(list_reservation_summaries)
            .service(get_reservation)
            .service(update_reservation)
            .service(delete_reservation)
            .service(list_users)
            .service(list_workshops);

        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(state.clone())
            .wrap(Trace)
            .service(api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
