//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM operations
//! for the mentor and student tables.

pub mod mentor;
pub mod student;

pub use mentor::{MentorRepository, NewMentor};
pub use student::{NewStudent, StudentRepository};
