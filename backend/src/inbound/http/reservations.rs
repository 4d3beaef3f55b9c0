//! Reservation HTTP handlers.
//!
//! ```text
//! POST   /api/reservation
//! GET    /api/reservation
//! GET    /api/reservation/{id}
//! PUT    /api/reservation/{id}
//! DELETE /api/reservation/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    NewReservation, Reservation, ReservationDetail, ReservationPatch, ReservationSummary,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_reservation_id, parse_rfc3339_timestamp, parse_status, require_field,
};

/// Request payload for creating a reservation.
///
/// Example JSON: `{"user_id":1,"workshop_id":1,"status":"CONFIRMED"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateReservationRequestBody {
    /// Attendee reference; required.
    pub user_id: Option<i32>,
    /// Workshop reference; required.
    pub workshop_id: Option<i32>,
    /// Explicit reservation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub date: Option<String>,
    /// Initial status; defaults to `PENDING`.
    pub status: Option<String>,
    /// Initial attendance flag; defaults to `false`.
    pub attended: Option<bool>,
}

/// Connect-style relation reference for re-pointing a reservation at
/// another user, mirroring the original wire format.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserConnectBody {
    /// The reference to connect.
    pub connect: UserConnectRef,
}

/// Target of a user relation change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserConnectRef {
    /// New attendee reference.
    pub user_id: i32,
}

/// Connect-style relation reference for re-pointing a reservation at
/// another workshop.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct WorkshopConnectBody {
    /// The reference to connect.
    pub connect: WorkshopConnectRef,
}

/// Target of a workshop relation change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct WorkshopConnectRef {
    /// New workshop reference.
    pub workshop_id: i32,
}

/// Request payload for partially updating a reservation.
///
/// Absent fields keep their stored value. Relation changes use the
/// connect-object form: `{"user":{"connect":{"user_id":2}}}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateReservationRequestBody {
    /// New reservation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub reservation_date: Option<String>,
    /// New lifecycle status.
    pub status: Option<String>,
    /// New attendance flag.
    pub attended: Option<bool>,
    /// Re-point at another user.
    pub user: Option<UserConnectBody>,
    /// Re-point at another workshop.
    pub workshop: Option<WorkshopConnectBody>,
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteReservationResponseBody {
    /// Human-readable confirmation.
    #[schema(example = "Reservation deleted successfully")]
    pub message: String,
}

fn parse_new_reservation(payload: CreateReservationRequestBody) -> ApiResult<NewReservation> {
    let user_id = require_field(payload.user_id, "user_id")?;
    let workshop_id = require_field(payload.workshop_id, "workshop_id")?;
    let reservation_date = payload
        .date
        .as_deref()
        .map(|raw| parse_rfc3339_timestamp(raw, "date"))
        .transpose()?;
    let status = payload.status.as_deref().map(parse_status).transpose()?;

    Ok(NewReservation {
        user_id,
        workshop_id,
        reservation_date,
        status,
        attended: payload.attended,
    })
}

fn parse_reservation_patch(payload: UpdateReservationRequestBody) -> ApiResult<ReservationPatch> {
    let reservation_date = payload
        .reservation_date
        .as_deref()
        .map(|raw| parse_rfc3339_timestamp(raw, "reservation_date"))
        .transpose()?;
    let status = payload.status.as_deref().map(parse_status).transpose()?;

    Ok(ReservationPatch {
        reservation_date,
        status,
        attended: payload.attended,
        user_id: payload.user.map(|body| body.connect.user_id),
        workshop_id: payload.workshop.map(|body| body.connect.workshop_id),
    })
}

/// Create a reservation.
#[utoipa::path(
    post,
    path = "/api/reservation",
    request_body = CreateReservationRequestBody,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "createReservation"
)]
#[post("/reservation")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    payload: web::Json<CreateReservationRequestBody>,
) -> ApiResult<HttpResponse> {
    let new_reservation = parse_new_reservation(payload.into_inner())?;
    let created = state.reservations.create(new_reservation).await?;
    Ok(HttpResponse::Created().json(created))
}

/// List the denormalised reservation summary rows.
#[utoipa::path(
    get,
    path = "/api/reservation",
    responses(
        (status = 200, description = "Summary rows", body = [ReservationSummary]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "listReservationSummaries"
)]
#[get("/reservation")]
pub async fn list_reservation_summaries(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ReservationSummary>>> {
    let summaries = state.reservations_query.list_summaries().await?;
    Ok(web::Json(summaries))
}

/// Fetch one reservation joined with its user and workshop.
#[utoipa::path(
    get,
    path = "/api/reservation/{id}",
    params(("id" = String, Path, description = "Reservation identifier")),
    responses(
        (status = 200, description = "Reservation with relations", body = ReservationDetail),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "getReservation"
)]
#[get("/reservation/{id}")]
pub async fn get_reservation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReservationDetail>> {
    let reservation_id = parse_reservation_id(&path.into_inner())?;
    let detail = state.reservations_query.get(reservation_id).await?;
    Ok(web::Json(detail))
}

/// Partially update a reservation.
#[utoipa::path(
    put,
    path = "/api/reservation/{id}",
    params(("id" = String, Path, description = "Reservation identifier")),
    request_body = UpdateReservationRequestBody,
    responses(
        (status = 200, description = "Updated reservation", body = Reservation),
        (status = 400, description = "Invalid id or payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "updateReservation"
)]
#[put("/reservation/{id}")]
pub async fn update_reservation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateReservationRequestBody>,
) -> ApiResult<web::Json<Reservation>> {
    let reservation_id = parse_reservation_id(&path.into_inner())?;
    let patch = parse_reservation_patch(payload.into_inner())?;
    let updated = state.reservations.update(reservation_id, patch).await?;
    Ok(web::Json(updated))
}

/// Delete a reservation.
#[utoipa::path(
    delete,
    path = "/api/reservation/{id}",
    params(("id" = String, Path, description = "Reservation identifier")),
    responses(
        (status = 200, description = "Deleted", body = DeleteReservationResponseBody),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["reservations"],
    operation_id = "deleteReservation"
)]
#[delete("/reservation/{id}")]
pub async fn delete_reservation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteReservationResponseBody>> {
    let reservation_id = parse_reservation_id(&path.into_inner())?;
    state.reservations.delete(reservation_id).await?;
    Ok(web::Json(DeleteReservationResponseBody {
        message: "Reservation deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
#[path = "reservations_tests.rs"]
mod tests;
