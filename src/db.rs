//! SQLite database layer for escuela-server
//!
//! Uses rusqlite with idempotent schema creation on startup. Foreign keys
//! are declared in the schema but SQLite leaves enforcement off unless the
//! `foreign_keys` pragma is enabled, and this service does not enable it:
//! inserts never pre-check referenced ids, so a course may point at a
//! teacher that does not exist.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection};

use crate::error::ServerResult;
use crate::models::{Course, Student, Teacher};

/// Thread-safe database wrapper
///
/// One connection behind a mutex; each operation holds the lock for the
/// duration of a single statement, released by the guard on every exit path.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl Database {
    /// Open or create the database at the given path
    pub fn open(path: impl Into<PathBuf>) -> ServerResult<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&path)?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        };

        db.run_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> ServerResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(":memory:"),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get the database file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get database file size in bytes
    pub fn size_bytes(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }

    /// Run schema migrations. Safe to repeat: every table is created with
    /// IF NOT EXISTS and existing data is untouched.
    fn run_migrations(&self) -> ServerResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ========================================================================
    // Students
    // ========================================================================

    /// Insert a student, returning the engine-assigned id.
    pub fn create_student(&self, name: &str, age: i64) -> ServerResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO estudiantes (nombre, edad) VALUES (?, ?)",
            params![name, age],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn list_students(&self) -> ServerResult<Vec<Student>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, nombre, edad FROM estudiantes")?;

        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    age: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(students)
    }

    // ========================================================================
    // Teachers
    // ========================================================================

    pub fn create_teacher(&self, name: &str, specialty: &str) -> ServerResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO profesores (nombre, especialidad) VALUES (?, ?)",
            params![name, specialty],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn list_teachers(&self) -> ServerResult<Vec<Teacher>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, nombre, especialidad FROM profesores")?;

        let teachers = stmt
            .query_map([], |row| {
                Ok(Teacher {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    specialty: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(teachers)
    }

    // ========================================================================
    // Courses
    // ========================================================================

    /// Insert a course. `teacher_id` is stored as-is, whether or not a
    /// matching teacher row exists.
    pub fn create_course(&self, name: &str, teacher_id: i64) -> ServerResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO cursos (nombre, profesor_id) VALUES (?, ?)",
            params![name, teacher_id],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn list_courses(&self) -> ServerResult<Vec<Course>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, nombre, profesor_id FROM cursos")?;

        let courses = stmt
            .query_map([], |row| {
                Ok(Course {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    teacher_id: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(courses)
    }

    // ========================================================================
    // Enrollments
    // ========================================================================

    /// Link a student to a course. The (estudiante_id, curso_id) pair is the
    /// table's primary key, so repeating an assignment fails with a
    /// constraint violation. Neither id is checked for existence.
    pub fn enroll_student(&self, student_id: i64, course_id: i64) -> ServerResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO estudiantes_cursos (estudiante_id, curso_id) VALUES (?, ?)",
            params![student_id, course_id],
        )?;
        Ok(())
    }
}

// ============================================================================
// Schema
// ============================================================================

const SCHEMA: &str = r#"
-- Students table
CREATE TABLE IF NOT EXISTS estudiantes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    edad INTEGER NOT NULL
);

-- Teachers table
CREATE TABLE IF NOT EXISTS profesores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    especialidad TEXT NOT NULL
);

-- Courses table
CREATE TABLE IF NOT EXISTS cursos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    profesor_id INTEGER,
    FOREIGN KEY (profesor_id) REFERENCES profesores(id)
);

-- Student-course enrollment relation
CREATE TABLE IF NOT EXISTS estudiantes_cursos (
    estudiante_id INTEGER,
    curso_id INTEGER,
    PRIMARY KEY (estudiante_id, curso_id),
    FOREIGN KEY (estudiante_id) REFERENCES estudiantes(id),
    FOREIGN KEY (curso_id) REFERENCES cursos(id)
);
"#;
