//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input with `questboard_core::validation`, delegate to
//! the matching repository in `questboard_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod character;
pub mod mission;
pub mod mission_queue;
