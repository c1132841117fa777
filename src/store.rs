//! Database bootstrap: target database creation and student table DDL.

use crate::error::StoreError;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Idempotent schema bootstrap for the student table.
///
/// Email uniqueness is scoped to rows that are not soft-deleted, hence the
/// partial unique index instead of a plain column constraint.
pub async fn ensure_student_table(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS student (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL,
            age INTEGER NOT NULL CHECK (age >= 16),
            department VARCHAR(50),
            enrolled_at DATE NOT NULL DEFAULT CURRENT_DATE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS student_email_active_idx \
         ON student (email) WHERE deleted_at IS NULL",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the target database when missing. Connects to the admin `postgres`
/// database on the same server; a no-op when the URL already points there.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = split_admin_url(database_url).ok_or_else(|| {
        StoreError::Database(sqlx::Error::Configuration(
            "DATABASE_URL has no database path".into(),
        ))
    })?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (url pointing at the admin db, database name).
fn split_admin_url(url: &str) -> Option<(String, String)> {
    let path_start = url.rfind('/')? + 1;
    let db_name = url.get(path_start..)?.split('?').next()?.trim().to_string();
    let admin_url = format!("{}postgres", url.get(..path_start)?);
    Some((admin_url, db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) = split_admin_url("postgres://localhost:5432/students").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "students");
    }

    #[test]
    fn strips_query_parameters() {
        let (_, name) = split_admin_url("postgres://host/students?sslmode=disable").unwrap();
        assert_eq!(name, "students");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("students"), "\"students\"");
        assert_eq!(quote_ident("odd\"name"), "\"odd\\\"name\"");
    }
}
