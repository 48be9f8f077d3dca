//! Character entity model and DTOs.

use questboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::mission::Mission;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    /// Only ever increased, by completing missions.
    pub experience: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character. Experience always starts at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
}

/// A character together with its accepted missions, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterWithMissions {
    #[serde(flatten)]
    pub character: Character,
    pub missions: Vec<Mission>,
}

/// Result of completing the front mission of a character's queue.
#[derive(Debug, Clone)]
pub struct CompletedMission {
    /// The character after the reward was applied.
    pub character: CharacterWithMissions,
    /// The mission that was dequeued.
    pub mission: Mission,
}
