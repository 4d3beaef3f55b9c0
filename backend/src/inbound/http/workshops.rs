//! Workshops API handlers.
//!
//! ```text
//! GET /api/workshops
//! ```

use actix_web::{get, web};

use crate::domain::Workshop;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// List all workshops, earliest scheduled first.
#[utoipa::path(
    get,
    path = "/api/workshops",
    responses(
        (status = 200, description = "Workshops ordered by date, ascending", body = [Workshop]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["workshops"],
    operation_id = "listWorkshops"
)]
#[get("/workshops")]
pub async fn list_workshops(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Workshop>>> {
    let workshops = state.workshops.list_workshops().await?;
    Ok(web::Json(workshops))
}
