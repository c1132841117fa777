//! Persistence gateway for students, backed by PostgreSQL.
//!
//! Every query carries an explicit `deleted_at IS NULL` predicate; soft
//! deletion is an update of the marker column, never a row removal.

use crate::error::StoreError;
use crate::model::{Student, StudentDraft};
use async_trait::async_trait;
use sqlx::PgPool;

const STUDENT_COLUMNS: &str =
    "id, name, email, age, department, enrolled_at, created_at, updated_at, deleted_at";

/// The storage operations for the student resource, plus a connectivity
/// probe for the readiness endpoint. Behind a trait so the handler layer can
/// run against any implementation.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Insert a new record. `enrolled_at` defaults to the current date when
    /// the draft leaves it unset.
    async fn create(&self, draft: &StudentDraft) -> Result<Student, StoreError>;

    /// Fetch the active record with this id. Soft-deleted rows count as
    /// missing.
    async fn get_by_id(&self, id: i64) -> Result<Student, StoreError>;

    /// All active records, in storage order.
    async fn list_all(&self) -> Result<Vec<Student>, StoreError>;

    /// Overwrite every client-writable field of the record, refreshing
    /// `updated_at`. Callers must pre-populate fields they want preserved.
    async fn update(&self, student: &Student) -> Result<Student, StoreError>;

    /// Mark the active record as deleted. Re-marking an already-deleted row
    /// reports `NotFound`.
    async fn soft_delete(&self, id: i64) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub struct PgStudentService {
    pool: PgPool,
}

impl PgStudentService {
    pub fn new(pool: PgPool) -> Self {
        PgStudentService { pool }
    }
}

#[async_trait]
impl StudentService for PgStudentService {
    async fn create(&self, draft: &StudentDraft) -> Result<Student, StoreError> {
        let sql = format!(
            "INSERT INTO student (name, email, age, department, enrolled_at) \
             VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE)) \
             RETURNING {STUDENT_COLUMNS}"
        );
        tracing::debug!(email = %draft.email, "insert student");
        sqlx::query_as::<_, Student>(&sql)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(draft.age)
            .bind(&draft.department)
            .bind(draft.enrolled_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, StoreError> {
        let sql =
            format!("SELECT {STUDENT_COLUMNS} FROM student WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<Student>, StoreError> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM student WHERE deleted_at IS NULL");
        let students = sqlx::query_as::<_, Student>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    async fn update(&self, student: &Student) -> Result<Student, StoreError> {
        let sql = format!(
            "UPDATE student \
             SET name = $1, email = $2, age = $3, department = $4, \
                 enrolled_at = $5, created_at = $6, updated_at = NOW() \
             WHERE id = $7 AND deleted_at IS NULL \
             RETURNING {STUDENT_COLUMNS}"
        );
        tracing::debug!(id = student.id, "update student");
        sqlx::query_as::<_, Student>(&sql)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .bind(&student.department)
            .bind(student.enrolled_at)
            .bind(student.created_at)
            .bind(student.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or(StoreError::NotFound)
    }

    async fn soft_delete(&self, id: i64) -> Result<(), StoreError> {
        tracing::debug!(id, "soft-delete student");
        let result =
            sqlx::query("UPDATE student SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Writes can trip the active-email unique index; report that as its own
/// kind so callers never parse driver messages.
fn map_write_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        other => StoreError::Database(other),
    }
}
