//! End-to-end API tests against the full router with an in-memory database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use escuela_server::server::create_router;
use escuela_server::Database;

fn test_app() -> Router {
    let db = Database::open_in_memory().unwrap();
    create_router(db, 30)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn full_scenario() {
    let app = test_app();

    // Teacher
    let (status, body) = post(
        &app,
        "/profesores",
        json!({"nombre": "Ana", "especialidad": "Matemáticas"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Profesor creado con éxito");

    let (status, body) = get(&app, "/profesores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([[1, "Ana", "Matemáticas"]]));

    // Course taught by that teacher
    let (status, _) = post(
        &app,
        "/cursos",
        json!({"nombre": "Álgebra", "profesor_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/cursos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([[1, "Álgebra", 1]]));

    // Student
    let (status, body) = post(&app, "/estudiantes", json!({"nombre": "Luis", "edad": 15})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Estudiante creado con éxito");

    let (status, body) = get(&app, "/estudiantes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([[1, "Luis", 15]]));

    // Assignment succeeds once
    let (status, body) = post(&app, "/asignar", json!({"estudiante_id": 1, "curso_id": 1})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Estudiante asignado al curso con éxito");

    // Repeating the same pair hits the primary-key constraint
    let (status, body) = post(&app, "/asignar", json!({"estudiante_id": 1, "curso_id": 1})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error interno del servidor");
}

#[tokio::test]
async fn listing_preserves_insertion_order() {
    let app = test_app();

    for (name, age) in [("Ana", 14), ("Luis", 15), ("Marta", 16)] {
        let (status, _) = post(&app, "/estudiantes", json!({"nombre": name, "edad": age})).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get(&app, "/estudiantes").await;
    assert_eq!(
        body,
        json!([[1, "Ana", 14], [2, "Luis", 15], [3, "Marta", 16]])
    );
}

#[tokio::test]
async fn missing_fields_return_generic_message() {
    let app = test_app();

    for (uri, body) in [
        ("/estudiantes", json!({"edad": 15})),
        ("/profesores", json!({"nombre": "Ana"})),
        ("/cursos", json!({"profesor_id": 1})),
        ("/asignar", json!({"curso_id": 1})),
        ("/asignar", json!({})),
    ] {
        let (status, body) = post(&app, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body["error"], "Datos incompletos", "uri: {uri}");
    }
}

#[tokio::test]
async fn course_with_dangling_teacher_id_is_accepted() {
    let app = test_app();

    // No teacher with id 99 exists; the insert is not rejected
    let (status, _) = post(
        &app,
        "/cursos",
        json!({"nombre": "Química", "profesor_id": 99}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/cursos").await;
    assert_eq!(body, json!([[1, "Química", 99]]));
}

#[tokio::test]
async fn enrollment_ids_are_not_checked_for_existence() {
    let app = test_app();

    let (status, _) = post(&app, "/asignar", json!({"estudiante_id": 7, "curso_id": 7})).await;
    assert_eq!(status, StatusCode::CREATED);
}
