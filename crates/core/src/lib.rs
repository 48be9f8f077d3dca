//! Domain types and rules for the quest board.
//!
//! Nothing in this crate touches the database or the network; the `db` and
//! `api` crates build on these types.

pub mod error;
pub mod mission_queue;
pub mod types;
pub mod validation;
