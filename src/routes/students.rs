//! Route table for the student resource.

use crate::handlers::students::{
    create_student, delete_student, get_student, list_students, update_student,
};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/students` collection: list/create on the root, get/update/delete by id.
pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students/", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}
