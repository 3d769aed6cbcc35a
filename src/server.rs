//! Main server module - Axum setup and router configuration
//!
//! Starts the HTTP server over the school database with CORS, request
//! tracing, per-request timeouts and graceful shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::db::Database;
use crate::routes;

/// Server command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "escuela-server", version, about)]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Database file path
    #[arg(long, default_value = "escuela.db")]
    pub db_path: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            port: 5000,
            bind: "127.0.0.1".to_string(),
            db_path: PathBuf::from("escuela.db"),
            timeout: 30,
        }
    }
}

/// Run the server with the given arguments
pub async fn run_server(args: ServerArgs) -> anyhow::Result<()> {
    info!("Opening database at {}", args.db_path.display());
    let db = Database::open(&args.db_path)?;

    let app = create_router(db, args.timeout);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;

    info!("Starting escuela-server on http://{}", addr);
    info!("Database: {}", args.db_path.display());

    let listener = TcpListener::bind(addr).await?;

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the Axum router with all routes
pub fn create_router(db: Database, timeout_secs: u64) -> Router {
    // CORS layer for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Middleware stack
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)))
        .layer(cors);

    Router::new()
        // Health
        .route("/health", get(routes::health_check))
        // Students
        .route(
            "/estudiantes",
            get(routes::list_students).post(routes::create_student),
        )
        // Teachers
        .route(
            "/profesores",
            get(routes::list_teachers).post(routes::create_teacher),
        )
        // Courses
        .route(
            "/cursos",
            get(routes::list_courses).post(routes::create_course),
        )
        // Enrollments
        .route("/asignar", post(routes::assign_student))
        .with_state(db)
        .layer(middleware)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
