//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: all reservation, user, workshop, and health endpoints plus
//! the schemas they reference. The generated specification backs Swagger UI
//! in debug builds.

use utoipa::OpenApi;

use crate::domain::{Reservation, ReservationDetail, ReservationStatus, ReservationSummary, User, Workshop};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::reservations::{
    CreateReservationRequestBody, DeleteReservationResponseBody, UpdateReservationRequestBody,
    UserConnectBody, UserConnectRef, WorkshopConnectBody, WorkshopConnectRef,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atelier reservations API",
        description = "HTTP interface for managing art-workshop reservations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::reservations::create_reservation,
        crate::inbound::http::reservations::list_reservation_summaries,
        crate::inbound::http::reservations::get_reservation,
        crate::inbound::http::reservations::update_reservation,
        crate::inbound::http::reservations::delete_reservation,
        crate::inbound::http::users::list_users,
        crate::inbound::http::workshops::list_workshops,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Reservation,
        ReservationDetail,
        ReservationStatus,
        ReservationSummary,
        User,
        Workshop,
        ErrorBody,
        CreateReservationRequestBody,
        UpdateReservationRequestBody,
        DeleteReservationResponseBody,
        UserConnectBody,
        UserConnectRef,
        WorkshopConnectBody,
        WorkshopConnectRef,
    )),
    tags(
        (name = "reservations", description = "Reservation lifecycle operations"),
        (name = "users", description = "User directory reads"),
        (name = "workshops", description = "Workshop catalogue reads"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn document_includes_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/reservation",
            "/api/reservation/{id}",
            "/api/users",
            "/api/workshops",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains(&expected), "missing path: {expected}");
        }
    }
}
