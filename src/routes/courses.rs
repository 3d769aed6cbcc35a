//! Course routes

use axum::{extract::State, http::StatusCode, Json};

use crate::db::Database;
use crate::error::{ServerError, ServerResult};
use crate::models::{Course, CreateCourseRequest, CreatedResponse};

/// POST /cursos - Create a course
///
/// `profesor_id` must be present but is not checked against the teachers
/// table; a dangling reference inserts successfully.
pub async fn create_course(
    State(db): State<Database>,
    Json(req): Json<CreateCourseRequest>,
) -> ServerResult<(StatusCode, Json<CreatedResponse>)> {
    let (name, teacher_id) = match (req.nombre, req.profesor_id) {
        (Some(n), Some(t)) if !n.trim().is_empty() => (n, t),
        _ => return Err(ServerError::IncompleteData),
    };

    let id = db.create_course(&name, teacher_id)?;
    tracing::debug!(id, teacher_id, "course created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Curso creado con éxito")),
    ))
}

/// GET /cursos - List all courses as [id, nombre, profesor_id] tuples
pub async fn list_courses(State(db): State<Database>) -> ServerResult<Json<Vec<Course>>> {
    let courses = db.list_courses()?;
    Ok(Json(courses))
}
