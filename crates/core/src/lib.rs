//! Domain types and rules shared by the askhub database and API layers.
//!
//! Everything here is pure: no I/O, no database types. Repositories and
//! handlers call into these modules to decide *what* should happen before
//! they touch the store.

pub mod answer_status;
pub mod content;
pub mod error;
pub mod mentions;
pub mod notification;
pub mod pagination;
pub mod roles;
pub mod search;
pub mod stats;
pub mod tags;
pub mod types;
pub mod users;
pub mod voting;
