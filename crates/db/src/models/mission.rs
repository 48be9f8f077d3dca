//! Mission entity model and DTOs.

use questboard_core::mission_queue::QueueItem;
use questboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A mission row from the `missions` table. Missions are never updated.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub description: String,
    pub xp_reward: i32,
    pub created_at: Timestamp,
}

impl QueueItem for Mission {
    fn key(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a new mission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMission {
    pub description: String,
    pub xp_reward: i32,
}
