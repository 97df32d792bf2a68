use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bus_management::config::{DatabaseConfig, EnvironmentConfig};
use bus_management::database::DatabaseConnection;
use bus_management::{create_app, AppState};

// Función helper para crear la app de test sobre una base en memoria
async fn create_test_app() -> Router {
    let connection = DatabaseConnection::new(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    let state = AppState::new(connection.pool().clone(), EnvironmentConfig::default());
    create_app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

fn sample_bus() -> Value {
    json!({
        "busNumber": "B100",
        "model": "Volvo9700",
        "capacity": 45,
        "year": 2020,
        "status": "active"
    })
}

fn sample_route() -> Value {
    json!({
        "routeName": "Express1",
        "origin": "CityA",
        "destination": "CityB",
        "distance": 120.5
    })
}

fn sample_schedule() -> Value {
    json!({
        "busId": 1,
        "routeId": 1,
        "departureTime": "2024-01-01T08:00:00",
        "arrivalTime": "2024-01-01T11:00:00"
    })
}

fn sample_reservation() -> Value {
    json!({
        "scheduleId": 1,
        "passengerName": "Jane Doe",
        "seatNumber": 12,
        "reservationDate": "2024-01-01"
    })
}

async fn seed_full_chain(app: &Router) {
    let (status, _) = send(app, Method::POST, "/buses", Some(sample_bus())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(app, Method::POST, "/routes", Some(sample_route())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(app, Method::POST, "/schedules", Some(sample_schedule())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(app, Method::POST, "/reservations", Some(sample_reservation())).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "bus-management");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_bus_returns_created_record() {
    let app = create_test_app().await;
    let (status, body) = send(&app, Method::POST, "/buses", Some(sample_bus())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "busNumber": "B100",
            "model": "Volvo9700",
            "capacity": 45,
            "year": 2020,
            "status": "active"
        })
    );

    let (status, fetched) = send(&app, Method::GET, "/buses/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_list_buses_starts_empty() {
    let app = create_test_app().await;
    let (status, body) = send(&app, Method::GET, "/buses", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_duplicate_bus_number_is_conflict() {
    let app = create_test_app().await;
    send(&app, Method::POST, "/buses", Some(sample_bus())).await;

    let (status, body) = send(&app, Method::POST, "/buses", Some(sample_bus())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (_, buses) = send(&app, Method::GET, "/buses", None).await;
    assert_eq!(buses.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_required_field_is_validation_error() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/buses",
        Some(json!({ "busNumber": "B200", "model": "Scania", "capacity": 40, "year": 2019 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_bus_number_longer_than_column_is_rejected() {
    let app = create_test_app().await;
    let mut bus = sample_bus();
    bus["busNumber"] = json!("B".repeat(21));

    let (status, body) = send(&app, Method::POST, "/buses", Some(bus)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_partial_bus_update_keeps_other_fields() {
    let app = create_test_app().await;
    send(&app, Method::POST, "/buses", Some(sample_bus())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/buses/1",
        Some(json!({ "status": "maintenance" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "maintenance");
    assert_eq!(body["busNumber"], "B100");
    assert_eq!(body["model"], "Volvo9700");
    assert_eq!(body["capacity"], 45);
    assert_eq!(body["year"], 2020);
}

#[tokio::test]
async fn test_update_unknown_bus_is_not_found() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/buses/99",
        Some(json!({ "status": "retired" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_unknown_bus_with_invalid_payload_is_not_found() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/buses/99",
        Some(json!({ "busNumber": "X".repeat(30) })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_unknown_route_with_invalid_payload_is_not_found() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/routes/99",
        Some(json!({ "origin": "X".repeat(150) })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_unknown_schedule_with_malformed_time_is_not_found() {
    let app = create_test_app().await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/schedules/99",
        Some(json!({ "departureTime": "garbage" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_existing_schedule_with_malformed_time_is_validation_error() {
    let app = create_test_app().await;
    seed_full_chain(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/schedules/1",
        Some(json!({ "departureTime": "garbage" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_schedule_with_unknown_bus_is_reference_error() {
    let app = create_test_app().await;
    send(&app, Method::POST, "/routes", Some(sample_route())).await;

    let (status, body) = send(&app, Method::POST, "/schedules", Some(sample_schedule())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "REFERENCE_ERROR");
}

#[tokio::test]
async fn test_schedule_with_malformed_time_is_validation_error() {
    let app = create_test_app().await;
    send(&app, Method::POST, "/buses", Some(sample_bus())).await;
    send(&app, Method::POST, "/routes", Some(sample_route())).await;

    let mut schedule = sample_schedule();
    schedule["departureTime"] = json!("tomorrow morning");

    let (status, body) = send(&app, Method::POST, "/schedules", Some(schedule)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_schedule_returns_flat_record() {
    let app = create_test_app().await;
    send(&app, Method::POST, "/buses", Some(sample_bus())).await;
    send(&app, Method::POST, "/routes", Some(sample_route())).await;

    let (status, body) = send(&app, Method::POST, "/schedules", Some(sample_schedule())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "busId": 1,
            "routeId": 1,
            "departureTime": "2024-01-01T08:00:00",
            "arrivalTime": "2024-01-01T11:00:00"
        })
    );
}

#[tokio::test]
async fn test_schedule_times_keep_fractional_seconds() {
    let app = create_test_app().await;
    send(&app, Method::POST, "/buses", Some(sample_bus())).await;
    send(&app, Method::POST, "/routes", Some(sample_route())).await;

    let mut schedule = sample_schedule();
    schedule["departureTime"] = json!("2024-01-01T08:00:00.500");

    let (status, created) = send(&app, Method::POST, "/schedules", Some(schedule)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["departureTime"], "2024-01-01T08:00:00.500");
    assert_eq!(created["arrivalTime"], "2024-01-01T11:00:00");

    let (status, body) = send(&app, Method::GET, "/schedules/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["departureTime"], "2024-01-01T08:00:00.500");
}

#[tokio::test]
async fn test_get_schedule_embeds_bus_and_route() {
    let app = create_test_app().await;
    seed_full_chain(&app).await;

    let (status, body) = send(&app, Method::GET, "/schedules/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bus"], json!({ "id": 1, "busNumber": "B100" }));
    assert_eq!(
        body["route"],
        json!({ "id": 1, "routeName": "Express1", "origin": "CityA", "destination": "CityB" })
    );
}

#[tokio::test]
async fn test_reservation_scenario_returns_nested_summary() {
    let app = create_test_app().await;
    seed_full_chain(&app).await;

    let (status, body) = send(&app, Method::GET, "/reservations/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "scheduleId": 1,
            "passengerName": "Jane Doe",
            "seatNumber": 12,
            "reservationDate": "2024-01-01",
            "schedule": {
                "id": 1,
                "departureTime": "2024-01-01T08:00:00",
                "arrivalTime": "2024-01-01T11:00:00",
                "bus": { "id": 1, "busNumber": "B100" },
                "route": {
                    "id": 1,
                    "routeName": "Express1",
                    "origin": "CityA",
                    "destination": "CityB"
                }
            }
        })
    );
}

#[tokio::test]
async fn test_delete_bus_cascades_to_schedule_and_reservation() {
    let app = create_test_app().await;
    seed_full_chain(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/buses/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Bus deleted successfully" }));

    let (status, _) = send(&app, Method::GET, "/schedules/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/reservations/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // La ruta no depende del bus y sigue existiendo
    let (status, _) = send(&app, Method::GET, "/routes/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_unknown_reservation_is_not_found() {
    let app = create_test_app().await;
    let (status, body) = send(&app, Method::DELETE, "/reservations/5", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_reservation_has_no_update_endpoint() {
    let app = create_test_app().await;
    seed_full_chain(&app).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/reservations/1",
        Some(json!({ "seatNumber": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_non_integer_id_is_not_found() {
    let app = create_test_app().await;
    let (status, _) = send(&app, Method::GET, "/buses/abc", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_stats_counts_every_table() {
    let app = create_test_app().await;
    seed_full_chain(&app).await;

    let (status, body) = send(&app, Method::GET, "/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "buses": 1, "routes": 1, "schedules": 1, "reservations": 1 })
    );
}
