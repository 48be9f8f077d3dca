use questboard_core::error::CoreError;

/// Failure of a transactional queue operation.
///
/// Domain outcomes (missing rows, empty queue) are reported as [`CoreError`]
/// so callers can tell them apart from storage failures.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
