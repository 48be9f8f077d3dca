pub mod character;
pub mod health;
pub mod mission;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                                   list, create
/// /characters/{id}                              get, delete
/// /characters/{id}/missions                     ordered queue (GET)
/// /characters/{id}/missions/next                front of queue (GET)
/// /characters/{id}/missions/{mission_id}        accept (POST)
/// /characters/{id}/complete                     complete front mission (POST)
///
/// /missions                                     list, create
/// /missions/{id}                                get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", character::router())
        .nest("/missions", mission::router())
}
