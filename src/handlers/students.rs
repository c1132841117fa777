//! HTTP handlers for the student resource: parse, validate, invoke the
//! gateway, map the outcome to a status and JSON body.

use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use crate::service::validate;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Path ids are non-negative integers; anything else is a client error.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("invalid student id '{raw}'"))),
    }
}

fn parse_body(body: Result<Json<StudentPayload>, JsonRejection>) -> Result<StudentPayload, AppError> {
    let Json(payload) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(payload)
}

pub async fn create_student(
    State(state): State<AppState>,
    body: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_body(body)?;
    let draft = validate(payload).map_err(AppError::Validation)?;
    let student = state.service.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id)?;
    let student = state.service.get_by_id(id).await?;
    Ok(Json(student))
}

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.service.list_all().await?;
    Ok(Json(students))
}

/// Full overwrite with two exceptions: `created_at` and `enrolled_at` fall
/// back to the stored record when the client omitted them. Everything else
/// the client omitted is blanked, department included.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id)?;
    let payload = parse_body(body)?;
    let draft = validate(payload).map_err(AppError::Validation)?;

    // The path id wins over anything in the body.
    let existing = state.service.get_by_id(id).await?;
    let record = Student {
        id,
        name: draft.name,
        email: draft.email,
        age: draft.age,
        department: draft.department,
        enrolled_at: draft.enrolled_at.unwrap_or(existing.enrolled_at),
        created_at: draft.created_at.unwrap_or(existing.created_at),
        updated_at: existing.updated_at,
        deleted_at: None,
    };
    let updated = state.service.update(&record).await?;
    Ok(Json(updated))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.service.get_by_id(id).await?;
    state.service.soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn rejects_non_integer_ids() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("7.5").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn rejects_negative_ids() {
        assert!(parse_id("-1").is_err());
    }
}
