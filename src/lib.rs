//! Student registry: a PostgreSQL-backed HTTP CRUD service for students.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, FieldError, StoreError};
pub use model::{Student, StudentDraft, StudentPayload};
pub use routes::{common_routes, student_routes};
pub use service::{PgStudentService, StudentService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_student_table};
