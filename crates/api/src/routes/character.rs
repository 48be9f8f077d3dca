//! Route definitions for characters and their mission queues.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{character, mission_queue};
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// DELETE /{id}                              -> delete
/// GET    /{id}/missions                     -> list_ordered
/// GET    /{id}/missions/next                -> peek_front
/// POST   /{id}/missions/{mission_id}        -> accept
/// POST   /{id}/complete                     -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route("/{id}", get(character::get_by_id).delete(character::delete))
        .route("/{id}/missions", get(mission_queue::list_ordered))
        .route("/{id}/missions/next", get(mission_queue::peek_front))
        .route("/{id}/missions/{mission_id}", post(mission_queue::accept))
        .route("/{id}/complete", post(mission_queue::complete))
}
