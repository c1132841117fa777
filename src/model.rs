//! Student entity and request payload shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A student row as persisted and as serialized in responses.
///
/// `deleted_at` is the soft-delete marker: a non-null value means the row is
/// retained in storage but invisible to every normal query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub department: Option<String>,
    pub enrolled_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Incoming request body. Every field is optional so missing required fields
/// are reported per-field by the validator instead of failing
/// deserialization wholesale. An `id` in the body is ignored; the path wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub department: Option<String>,
    pub enrolled_at: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A payload that passed validation. `enrolled_at` and `created_at` stay
/// optional: the store defaults the former on insert, and the update handler
/// merges both from the stored record when the client omitted them.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub department: Option<String>,
    pub enrolled_at: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}
