//! Handlers for the `/missions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use questboard_core::error::CoreError;
use questboard_core::types::DbId;
use questboard_core::validation::{validate_mission_description, validate_xp_reward};
use questboard_db::models::mission::CreateMission;
use questboard_db::repositories::MissionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/missions
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMission>,
) -> AppResult<impl IntoResponse> {
    validate_mission_description(&input.description).map_err(AppError::Core)?;
    validate_xp_reward(input.xp_reward).map_err(AppError::Core)?;

    let mission = MissionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        mission_id = mission.id,
        xp_reward = mission.xp_reward,
        "Mission created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: mission })))
}

/// GET /api/v1/missions
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let missions = MissionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: missions }))
}

/// GET /api/v1/missions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mission = MissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mission",
            id,
        }))?;
    Ok(Json(DataResponse { data: mission }))
}

/// DELETE /api/v1/missions/{id}
///
/// Removes the mission from every character's queue, then deletes it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MissionRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(mission_id = id, "Mission deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Mission",
            id,
        }))
    }
}
