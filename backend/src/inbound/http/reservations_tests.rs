//! Handler-level coverage for the reservation endpoints, exercised through
//! the Actix test harness with mocked driving ports.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test, web};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    MockReservationCommand, MockReservationQuery, MockUsersQuery, MockWorkshopsQuery,
    ReservationCommand, ReservationQuery,
};
use crate::domain::{Error, ReservationStatus, User, Workshop};

fn stored_reservation(reservation_id: i32) -> Reservation {
    Reservation {
        reservation_id,
        user_id: 1,
        workshop_id: 1,
        reservation_date: Utc
            .with_ymd_and_hms(2026, 3, 14, 10, 0, 0)
            .single()
            .expect("timestamp"),
        status: ReservationStatus::Pending,
        attended: false,
    }
}

fn state_with(
    command: MockReservationCommand,
    query: MockReservationQuery,
) -> web::Data<HttpState> {
    let command: Arc<dyn ReservationCommand> = Arc::new(command);
    let query: Arc<dyn ReservationQuery> = Arc::new(query);
    web::Data::new(HttpState::new(
        command,
        query,
        Arc::new(MockUsersQuery::new()),
        Arc::new(MockWorkshopsQuery::new()),
    ))
}

fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).service(
        web::scope("/api")
            .service(create_reservation)
            .service(list_reservation_summaries)
            .service(get_reservation)
            .service(update_reservation)
            .service(delete_reservation),
    )
}

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

#[actix_web::test]
async fn create_returns_201_with_the_created_reservation() {
    let mut command = MockReservationCommand::new();
    command
        .expect_create()
        .withf(|new| {
            new.user_id == 1 && new.workshop_id == 1 && new.status.is_none() && new.attended.is_none()
        })
        .returning(|_| Ok(stored_reservation(7)));
    let app = actix_test::init_service(test_app(state_with(
        command,
        MockReservationQuery::new(),
    )))
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/api/reservation")
        .set_json(json!({ "user_id": 1, "workshop_id": 1 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let value = read_json(response).await;
    assert_eq!(value.get("reservation_id").and_then(Value::as_i64), Some(7));
    assert_eq!(value.get("status").and_then(Value::as_str), Some("PENDING"));
    assert_eq!(value.get("attended").and_then(Value::as_bool), Some(false));
}

#[rstest]
#[case(json!({ "workshop_id": 1 }), "user_id")]
#[case(json!({ "user_id": 1 }), "workshop_id")]
#[actix_web::test]
async fn create_rejects_missing_references_without_reaching_the_port(
    #[case] body: Value,
    #[case] field: &str,
) {
    // No expectations: a port call panics the test.
    let app = actix_test::init_service(test_app(state_with(
        MockReservationCommand::new(),
        MockReservationQuery::new(),
    )))
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/api/reservation")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = read_json(response).await;
    let message = value.get("error").and_then(Value::as_str).expect("error message");
    assert!(message.contains(field));
}

#[rstest]
#[case("abc")]
#[case("0")]
#[case("-1")]
#[case("1.5")]
#[actix_web::test]
async fn get_rejects_malformed_ids_without_reaching_the_port(#[case] raw_id: &str) {
    let app = actix_test::init_service(test_app(state_with(
        MockReservationCommand::new(),
        MockReservationQuery::new(),
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/reservation/{raw_id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = read_json(response).await;
    assert!(value.get("error").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn get_returns_404_for_absent_reservations() {
    let mut query = MockReservationQuery::new();
    query
        .expect_get()
        .returning(|id| Err(Error::not_found(format!("reservation {id} not found"))));
    let app = actix_test::init_service(test_app(state_with(
        MockReservationCommand::new(),
        query,
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reservation/99")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value = read_json(response).await;
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("reservation 99 not found")
    );
}

#[actix_web::test]
async fn get_returns_the_reservation_with_relations() {
    let mut query = MockReservationQuery::new();
    query.expect_get().returning(|id| {
        Ok(ReservationDetail {
            reservation: stored_reservation(id),
            user: User {
                user_id: 1,
                full_name: "Ada Lovelace".to_owned(),
                email: "ada@example.com".to_owned(),
                phone: None,
                created_at: Utc
                    .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                    .single()
                    .expect("timestamp"),
            },
            workshop: Workshop {
                workshop_id: 1,
                title: "Watercolour Basics".to_owned(),
                description: "An introduction".to_owned(),
                date: Utc
                    .with_ymd_and_hms(2026, 4, 1, 9, 0, 0)
                    .single()
                    .expect("timestamp"),
                duration_minutes: 90,
                capacity: 12,
                instructor_id: 1,
            },
        })
    });
    let app = actix_test::init_service(test_app(state_with(
        MockReservationCommand::new(),
        query,
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reservation/5")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = read_json(response).await;
    // The reservation is flattened into the envelope with nested relations.
    assert_eq!(value.get("reservation_id").and_then(Value::as_i64), Some(5));
    assert_eq!(
        value
            .get("user")
            .and_then(|user| user.get("full_name"))
            .and_then(Value::as_str),
        Some("Ada Lovelace")
    );
    assert_eq!(
        value
            .get("workshop")
            .and_then(|workshop| workshop.get("title"))
            .and_then(Value::as_str),
        Some("Watercolour Basics")
    );
}

#[actix_web::test]
async fn update_forwards_only_the_supplied_fields() {
    let mut command = MockReservationCommand::new();
    command
        .expect_update()
        .withf(|id, patch| {
            *id == 5
                && patch.attended == Some(true)
                && patch.status.is_none()
                && patch.reservation_date.is_none()
                && patch.user_id.is_none()
                && patch.workshop_id.is_none()
        })
        .returning(|id, _| {
            Ok(Reservation {
                attended: true,
                ..stored_reservation(id)
            })
        });
    let app = actix_test::init_service(test_app(state_with(
        command,
        MockReservationQuery::new(),
    )))
    .await;

    let request = actix_test::TestRequest::put()
        .uri("/api/reservation/5")
        .set_json(json!({ "attended": true }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = read_json(response).await;
    assert_eq!(value.get("attended").and_then(Value::as_bool), Some(true));
}

#[actix_web::test]
async fn update_translates_connect_objects_into_reference_changes() {
    let mut command = MockReservationCommand::new();
    command
        .expect_update()
        .withf(|_, patch| patch.user_id == Some(2) && patch.workshop_id == Some(3))
        .returning(|id, _| {
            Ok(Reservation {
                user_id: 2,
                workshop_id: 3,
                ..stored_reservation(id)
            })
        });
    let app = actix_test::init_service(test_app(state_with(
        command,
        MockReservationQuery::new(),
    )))
    .await;

    let request = actix_test::TestRequest::put()
        .uri("/api/reservation/5")
        .set_json(json!({
            "user": { "connect": { "user_id": 2 } },
            "workshop": { "connect": { "workshop_id": 3 } }
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn update_rejects_unknown_status_values() {
    let app = actix_test::init_service(test_app(state_with(
        MockReservationCommand::new(),
        MockReservationQuery::new(),
    )))
    .await;

    let request = actix_test::TestRequest::put()
        .uri("/api/reservation/5")
        .set_json(json!({ "status": "DONE" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_returns_a_confirmation_message() {
    let mut command = MockReservationCommand::new();
    command.expect_delete().returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(state_with(
        command,
        MockReservationQuery::new(),
    )))
    .await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/reservation/5")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = read_json(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Reservation deleted successfully")
    );
}

#[actix_web::test]
async fn summary_list_passes_empty_collections_through() {
    let mut query = MockReservationQuery::new();
    query.expect_list_summaries().returning(|| Ok(Vec::new()));
    let app = actix_test::init_service(test_app(state_with(
        MockReservationCommand::new(),
        query,
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reservation")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = read_json(response).await;
    assert_eq!(value.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn persistence_failures_surface_as_500_with_details() {
    let mut query = MockReservationQuery::new();
    query.expect_list_summaries().returning(|| {
        Err(Error::internal("reservation repository error").with_details("connection refused"))
    });
    let app = actix_test::init_service(test_app(state_with(
        MockReservationCommand::new(),
        query,
    )))
    .await;

    let request = actix_test::TestRequest::get()
        .uri("/api/reservation")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let value = read_json(response).await;
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("reservation repository error")
    );
    assert_eq!(
        value.get("details").and_then(Value::as_str),
        Some("connection refused")
    );
}
