//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod character_repo;
pub mod mission_queue_repo;
pub mod mission_repo;

pub use character_repo::CharacterRepo;
pub use mission_queue_repo::MissionQueueRepo;
pub use mission_repo::MissionRepo;
