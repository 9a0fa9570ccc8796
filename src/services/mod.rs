//! # Services
//!
//! Business logic sitting between the HTTP handlers and the record store.

pub mod assignment;

pub use assignment::{AssignmentError, AssignmentService};
