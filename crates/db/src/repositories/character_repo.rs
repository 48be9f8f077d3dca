//! Repository for the `characters` table.

use std::collections::HashMap;

use questboard_core::mission_queue::MissionQueue;
use questboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::character::{Character, CharacterWithMissions, CreateCharacter};
use crate::models::mission::Mission;
use crate::repositories::mission_queue_repo::MissionQueueRepo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, experience, created_at, updated_at";

/// Provides create/read/delete operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character with zero experience, returning the created row.
    ///
    /// A duplicate name violates `uq_characters_name`.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a character by its exact (already trimmed) name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE name = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all characters, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a character by ID together with its ordered mission queue.
    pub async fn find_with_missions(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterWithMissions>, sqlx::Error> {
        let Some(character) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let missions = MissionQueueRepo::fetch_missions(pool, id).await?;
        Ok(Some(CharacterWithMissions {
            character,
            missions,
        }))
    }

    /// List all characters with their ordered mission queues.
    ///
    /// Loads every acceptance row in one query and groups them in memory.
    pub async fn list_with_missions(
        pool: &PgPool,
    ) -> Result<Vec<CharacterWithMissions>, sqlx::Error> {
        let characters = Self::list(pool).await?;

        let rows: Vec<(DbId, DbId, String, i32, Timestamp)> =
            sqlx::query_as(
                "SELECT cm.character_id, m.id, m.description, m.xp_reward, m.created_at \
                 FROM character_missions cm \
                 JOIN missions m ON m.id = cm.mission_id \
                 WHERE cm.completed_at IS NULL \
                 ORDER BY cm.id ASC",
            )
            .fetch_all(pool)
            .await?;

        let mut queues: HashMap<DbId, MissionQueue<Mission>> = HashMap::new();
        for (character_id, id, description, xp_reward, created_at) in rows {
            queues.entry(character_id).or_default().enqueue(Mission {
                id,
                description,
                xp_reward,
                created_at,
            });
        }

        Ok(characters
            .into_iter()
            .map(|character| {
                let missions = queues
                    .remove(&character.id)
                    .map(MissionQueue::into_vec)
                    .unwrap_or_default();
                CharacterWithMissions {
                    character,
                    missions,
                }
            })
            .collect())
    }

    /// Delete a character and all of its acceptance rows, open or completed,
    /// in one transaction.
    ///
    /// Missions and other characters' queues are untouched. Returns `true`
    /// if the character existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM characters WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(false);
        }

        let released = sqlx::query("DELETE FROM character_missions WHERE character_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(character_id = id, released, "Deleted character");
        Ok(true)
    }
}
