//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `FromRow` projections for joined listing queries
//! - A create DTO for inserts, built by the handlers after validation

pub mod admin;
pub mod answer;
pub mod comment;
pub mod notification;
pub mod question;
pub mod session;
pub mod tag;
pub mod user;
pub mod vote;
