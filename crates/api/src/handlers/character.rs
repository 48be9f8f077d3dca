//! Handlers for the `/characters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use questboard_core::error::CoreError;
use questboard_core::types::DbId;
use questboard_core::validation::normalize_character_name;
use questboard_db::models::character::{CharacterWithMissions, CreateCharacter};
use questboard_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/characters
///
/// The name is trimmed before the uniqueness check. A concurrent insert of
/// the same name still fails with 409 through `uq_characters_name`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCharacter>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_character_name(&input.name).map_err(AppError::Core)?;

    if CharacterRepo::find_by_name(&state.pool, &name).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A character named '{name}' already exists"
        ))));
    }

    let character = CharacterRepo::create(&state.pool, &CreateCharacter { name }).await?;

    tracing::info!(
        character_id = character.id,
        name = %character.name,
        "Character created"
    );

    let data = CharacterWithMissions {
        character,
        missions: Vec::new(),
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// GET /api/v1/characters
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let characters = CharacterRepo::list_with_missions(&state.pool).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let character = CharacterRepo::find_with_missions(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(DataResponse { data: character }))
}

/// DELETE /api/v1/characters/{id}
///
/// Drops the character's whole queue along with it. Missions are kept.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(character_id = id, "Character deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
    }
}
