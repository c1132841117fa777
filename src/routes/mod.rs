//! Route tables.

pub mod common;
pub mod students;

pub use common::common_routes;
pub use students::student_routes;
