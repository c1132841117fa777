//! Request handlers.

pub mod students;
