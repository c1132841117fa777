//! Persistence gateway and request validation.

pub mod students;
pub mod validation;

pub use students::{PgStudentService, StudentService};
pub use validation::validate;
