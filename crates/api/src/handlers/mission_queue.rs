//! Handlers for a character's mission queue.
//!
//! Missions are completed strictly in acceptance order:
//! `/characters/{id}/missions[/next|/{mission_id}]` and
//! `/characters/{id}/complete`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use questboard_core::types::DbId;
use questboard_db::repositories::MissionQueueRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/characters/{id}/missions/{mission_id}
///
/// Accepting an already queued mission returns 200 with the queue unchanged.
pub async fn accept(
    State(state): State<AppState>,
    Path((id, mission_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let character = MissionQueueRepo::accept(&state.pool, id, mission_id).await?;
    Ok(Json(DataResponse { data: character }))
}

/// POST /api/v1/characters/{id}/complete
///
/// Completes the oldest accepted mission and returns the updated character.
/// Responds 400 `EMPTY_QUEUE` when nothing is queued.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let completed = MissionQueueRepo::complete(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: completed.character,
    }))
}

/// GET /api/v1/characters/{id}/missions
pub async fn list_ordered(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let missions = MissionQueueRepo::list_ordered(&state.pool, id).await?;
    Ok(Json(DataResponse { data: missions }))
}

/// GET /api/v1/characters/{id}/missions/next
///
/// `data` is `null` when the queue is empty.
pub async fn peek_front(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let front = MissionQueueRepo::peek_front(&state.pool, id).await?;
    Ok(Json(DataResponse { data: front }))
}
