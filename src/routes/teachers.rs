//! Teacher routes

use axum::{extract::State, http::StatusCode, Json};

use crate::db::Database;
use crate::error::{ServerError, ServerResult};
use crate::models::{CreateTeacherRequest, CreatedResponse, Teacher};

/// POST /profesores - Create a teacher
pub async fn create_teacher(
    State(db): State<Database>,
    Json(req): Json<CreateTeacherRequest>,
) -> ServerResult<(StatusCode, Json<CreatedResponse>)> {
    let (name, specialty) = match (req.nombre, req.especialidad) {
        (Some(n), Some(s)) if !n.trim().is_empty() && !s.trim().is_empty() => (n, s),
        _ => return Err(ServerError::IncompleteData),
    };

    let id = db.create_teacher(&name, &specialty)?;
    tracing::debug!(id, "teacher created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Profesor creado con éxito")),
    ))
}

/// GET /profesores - List all teachers as [id, nombre, especialidad] tuples
pub async fn list_teachers(State(db): State<Database>) -> ServerResult<Json<Vec<Teacher>>> {
    let teachers = db.list_teachers()?;
    Ok(Json(teachers))
}
