//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the signed-in user, from a Bearer token or the
//!   session cookie.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.

pub mod auth;
pub mod rbac;
