//! Enrollment routes - the student-course relation

use axum::{extract::State, http::StatusCode, Json};

use crate::db::Database;
use crate::error::{ServerError, ServerResult};
use crate::models::{AssignRequest, CreatedResponse};

/// POST /asignar - Assign a student to a course
///
/// Neither id is checked for existence. Assigning the same pair twice fails
/// at the storage layer: the pair is the enrollment table's primary key.
pub async fn assign_student(
    State(db): State<Database>,
    Json(req): Json<AssignRequest>,
) -> ServerResult<(StatusCode, Json<CreatedResponse>)> {
    let (student_id, course_id) = match (req.estudiante_id, req.curso_id) {
        (Some(s), Some(c)) => (s, c),
        _ => return Err(ServerError::IncompleteData),
    };

    db.enroll_student(student_id, course_id)?;
    tracing::debug!(student_id, course_id, "student assigned to course");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Estudiante asignado al curso con éxito")),
    ))
}
