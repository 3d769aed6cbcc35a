//! Route handlers for escuela-server
//!
//! Organized by resource type:
//! - students: POST/GET /estudiantes
//! - teachers: POST/GET /profesores
//! - courses: POST/GET /cursos
//! - enrollments: POST /asignar
//! - health: Health check endpoint

pub mod courses;
pub mod enrollments;
pub mod health;
pub mod students;
pub mod teachers;

pub use courses::*;
pub use enrollments::*;
pub use health::*;
pub use students::*;
pub use teachers::*;
