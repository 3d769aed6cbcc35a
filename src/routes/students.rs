//! Student routes

use axum::{extract::State, http::StatusCode, Json};

use crate::db::Database;
use crate::error::{ServerError, ServerResult};
use crate::models::{CreateStudentRequest, CreatedResponse, Student};

/// POST /estudiantes - Create a student
///
/// Both fields must be present; the name must be non-empty. An age of 0 is
/// a present value, not a missing one.
pub async fn create_student(
    State(db): State<Database>,
    Json(req): Json<CreateStudentRequest>,
) -> ServerResult<(StatusCode, Json<CreatedResponse>)> {
    let (name, age) = match (req.nombre, req.edad) {
        (Some(n), Some(a)) if !n.trim().is_empty() => (n, a),
        _ => return Err(ServerError::IncompleteData),
    };

    let id = db.create_student(&name, age)?;
    tracing::debug!(id, "student created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Estudiante creado con éxito")),
    ))
}

/// GET /estudiantes - List all students as [id, nombre, edad] tuples
pub async fn list_students(State(db): State<Database>) -> ServerResult<Json<Vec<Student>>> {
    let students = db.list_students()?;
    Ok(Json(students))
}
