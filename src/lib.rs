//! escuela-server: HTTP API over a school SQLite database
//!
//! Exposes create/list endpoints for students, teachers and courses, plus
//! an endpoint assigning students to courses. All state lives in a single
//! SQLite file whose schema is created idempotently on startup.

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;

pub use db::Database;
pub use error::{ServerError, ServerResult};
