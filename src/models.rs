//! Request and response models for escuela-server
//!
//! Wire field names stay in Spanish: they are the protocol. List responses
//! serialize each row as a fixed-order tuple (id first, then the columns in
//! schema declaration order), matching the persisted column layout.

use serde::{Deserialize, Serialize, Serializer};

// ============================================================================
// Entities
// ============================================================================

/// A student row. On the wire: `[id, nombre, edad]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl Serialize for Student {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.id, &self.name, self.age).serialize(serializer)
    }
}

/// A teacher row. On the wire: `[id, nombre, especialidad]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

impl Serialize for Teacher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.id, &self.name, &self.specialty).serialize(serializer)
    }
}

/// A course row. On the wire: `[id, nombre, profesor_id]`.
///
/// `teacher_id` is nullable in the schema and is stored as given: no check
/// that the referenced teacher exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub teacher_id: Option<i64>,
}

impl Serialize for Course {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.id, &self.name, self.teacher_id).serialize(serializer)
    }
}

// ============================================================================
// Requests
// ============================================================================
//
// Every field is Option so that absent keys reach the handler instead of
// failing JSON extraction; presence is checked explicitly there. A numeric
// zero counts as present.

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub nombre: Option<String>,
    pub edad: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub nombre: Option<String>,
    pub especialidad: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub nombre: Option<String>,
    pub profesor_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignRequest {
    pub estudiante_id: Option<i64>,
    pub curso_id: Option<i64>,
}

// ============================================================================
// Responses
// ============================================================================

/// Generic creation acknowledgment
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
}

impl CreatedResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

// ============================================================================
// Health Check
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    pub path: String,
    pub size_bytes: Option<u64>,
}
