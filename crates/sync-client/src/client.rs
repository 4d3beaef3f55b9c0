//! Reqwest-backed API client for the reservations backend.
//!
//! The client owns transport details only: URL construction, request
//! serialisation, timeout and HTTP error mapping, and JSON decoding into
//! wire types.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::{
    CreateReservationParams, Reservation, ReservationDetail, ReservationSummary,
    UpdateReservationParams, User, Workshop,
};

/// Errors raised by the API client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request timed out before a response arrived.
    #[error("request timed out: {message}")]
    Timeout {
        /// Underlying transport message.
        message: String,
    },

    /// The request failed below the HTTP layer.
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying transport message.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("API request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Compacted response body, for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Underlying decode message.
        message: String,
    },
}

impl ClientError {
    fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Typed HTTP client for the reservations API.
///
/// Every request carries the configured timeout, so a hung server cannot
/// pin a caller indefinitely.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client for the given base URL with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be
    /// constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: ensure_trailing_slash(base_url),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::transport(format!("invalid endpoint {path}: {err}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }

    /// Fetch all users, most recently created first.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json("users").await
    }

    /// Fetch all workshops, earliest scheduled first.
    pub async fn list_workshops(&self) -> Result<Vec<Workshop>, ClientError> {
        self.get_json("workshops").await
    }

    /// Fetch all reservation summary rows.
    pub async fn list_reservation_summaries(
        &self,
    ) -> Result<Vec<ReservationSummary>, ClientError> {
        self.get_json("reservation").await
    }

    /// Fetch one reservation joined with its user and workshop.
    pub async fn get_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<ReservationDetail, ClientError> {
        self.get_json(&format!("reservation/{reservation_id}")).await
    }

    /// Create a reservation.
    pub async fn create_reservation(
        &self,
        params: &CreateReservationParams,
    ) -> Result<Reservation, ClientError> {
        let url = self.endpoint("reservation")?;
        let response = self
            .client
            .post(url)
            .json(&build_create_body(params))
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }

    /// Partially update a reservation.
    pub async fn update_reservation(
        &self,
        reservation_id: i32,
        params: &UpdateReservationParams,
    ) -> Result<Reservation, ClientError> {
        let url = self.endpoint(&format!("reservation/{reservation_id}"))?;
        let response = self
            .client
            .put(url)
            .json(&build_update_body(params))
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }

    /// Delete a reservation. Succeeds only on a 2xx response.
    pub async fn delete_reservation(&self, reservation_id: i32) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("reservation/{reservation_id}"))?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(())
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    url
}

#[derive(Debug, Serialize)]
struct CreateBody {
    user_id: i32,
    workshop_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<crate::types::ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attended: Option<bool>,
}

fn build_create_body(params: &CreateReservationParams) -> CreateBody {
    CreateBody {
        user_id: params.user_id,
        workshop_id: params.workshop_id,
        date: params.date,
        status: params.status,
        attended: params.attended,
    }
}

#[derive(Debug, Serialize)]
struct UserConnect {
    connect: UserConnectRef,
}

#[derive(Debug, Serialize)]
struct UserConnectRef {
    user_id: i32,
}

#[derive(Debug, Serialize)]
struct WorkshopConnect {
    connect: WorkshopConnectRef,
}

#[derive(Debug, Serialize)]
struct WorkshopConnectRef {
    workshop_id: i32,
}

#[derive(Debug, Serialize)]
struct UpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    reservation_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<crate::types::ReservationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserConnect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workshop: Option<WorkshopConnect>,
}

/// Relation changes travel as connect-style objects, matching the server's
/// wire format.
fn build_update_body(params: &UpdateReservationParams) -> UpdateBody {
    UpdateBody {
        reservation_date: params.reservation_date,
        status: params.status,
        attended: params.attended,
        user: params.user_id.map(|user_id| UserConnect {
            connect: UserConnectRef { user_id },
        }),
        workshop: params.workshop_id.map(|workshop_id| WorkshopConnect {
            connect: WorkshopConnectRef { workshop_id },
        }),
    }
}

async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    serde_json::from_slice(body.as_ref())
        .map_err(|err| ClientError::decode(format!("invalid JSON payload: {err}")))
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::timeout(error.to_string())
    } else {
        ClientError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ClientError {
    ClientError::Status {
        status: status.as_u16(),
        body: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network client helpers.

    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::types::ReservationStatus;

    #[rstest]
    #[case("http://localhost:8080/api")]
    #[case("http://localhost:8080/api/")]
    fn endpoints_join_regardless_of_trailing_slash(#[case] base: &str) {
        let client = ApiClient::new(base.parse().expect("base url"), Duration::from_secs(5))
            .expect("client builds");

        let url = client.endpoint("reservation/5").expect("joined url");
        assert_eq!(url.as_str(), "http://localhost:8080/api/reservation/5");
    }

    #[rstest]
    fn create_body_omits_absent_fields() {
        let body = build_create_body(&CreateReservationParams {
            user_id: 1,
            workshop_id: 2,
            date: None,
            status: None,
            attended: None,
        });

        let value = serde_json::to_value(body).expect("serialise");
        assert_eq!(value, json!({ "user_id": 1, "workshop_id": 2 }));
    }

    #[rstest]
    fn update_body_uses_connect_objects_for_relations() {
        let body = build_update_body(&UpdateReservationParams {
            attended: Some(true),
            status: Some(ReservationStatus::Confirmed),
            user_id: Some(2),
            workshop_id: Some(3),
            ..UpdateReservationParams::default()
        });

        let value = serde_json::to_value(body).expect("serialise");
        assert_eq!(
            value,
            json!({
                "attended": true,
                "status": "CONFIRMED",
                "user": { "connect": { "user_id": 2 } },
                "workshop": { "connect": { "workshop_id": 3 } }
            })
        );
    }

    #[rstest]
    fn update_body_omits_untouched_fields() {
        let body = build_update_body(&UpdateReservationParams::default());
        let value = serde_json::to_value(body).expect("serialise");
        assert_eq!(value, json!({}));
    }

    #[rstest]
    fn status_errors_keep_the_status_and_a_body_preview() {
        let error = map_status_error(
            StatusCode::NOT_FOUND,
            br#"{ "error": "Reservation not found" }"#,
        );

        assert_eq!(error.to_string(), "API request failed with status 404");
        let ClientError::Status { status, body } = error else {
            panic!("expected status error");
        };
        assert_eq!(status, 404);
        assert!(body.contains("Reservation not found"));
    }

    #[rstest]
    fn body_preview_compacts_and_truncates() {
        let long = "word ".repeat(100);
        let preview = body_preview(long.as_bytes());

        assert!(preview.len() <= 163, "preview stays bounded");
        assert!(preview.ends_with("..."));
        assert!(!preview.contains('\n'));
    }

    #[rstest]
    fn detail_payload_round_trips_flattened_reservation() {
        let payload = json!({
            "reservation_id": 5,
            "user_id": 1,
            "workshop_id": 2,
            "reservation_date": "2026-03-14T10:00:00Z",
            "status": "PENDING",
            "attended": false,
            "user": {
                "user_id": 1,
                "full_name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": null,
                "created_at": "2026-01-01T00:00:00Z"
            },
            "workshop": {
                "workshop_id": 2,
                "title": "Watercolour Basics",
                "description": "An introduction",
                "date": "2026-04-01T09:00:00Z",
                "duration_minutes": 90,
                "capacity": 12,
                "instructor_id": 1
            }
        });

        let detail: crate::types::ReservationDetail =
            serde_json::from_value(payload).expect("decode detail");
        assert_eq!(detail.reservation.reservation_id, 5);
        assert_eq!(detail.user.full_name, "Ada Lovelace");
        assert_eq!(detail.workshop.duration_minutes, 90);

        let encoded = serde_json::to_value(&detail).expect("encode detail");
        assert_eq!(
            encoded.get("reservation_id").and_then(Value::as_i64),
            Some(5),
            "reservation fields stay flattened"
        );
    }
}
