//! Repository for per-character mission queues (`character_missions`).
//!
//! A queue is the set of a character's open (not yet completed) acceptance
//! rows ordered by their `id` sequence, oldest first. Completed rows are kept
//! so a finished mission is never queued again. Mutations lock the character
//! row with `SELECT ... FOR UPDATE` before reading the queue, so concurrent
//! calls for the same character run one after another and each sees the
//! previous call's committed result.

use questboard_core::error::CoreError;
use questboard_core::mission_queue::MissionQueue;
use questboard_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::QueueError;
use crate::models::character::{Character, CharacterWithMissions, CompletedMission};
use crate::models::mission::Mission;
use crate::repositories::character_repo::COLUMNS as CHARACTER_COLUMNS;
use crate::repositories::mission_repo::COLUMNS as MISSION_COLUMNS;

/// Select a character's queued missions in acceptance order.
const QUEUE_QUERY: &str = "SELECT m.id, m.description, m.xp_reward, m.created_at \
     FROM character_missions cm \
     JOIN missions m ON m.id = cm.mission_id \
     WHERE cm.character_id = $1 AND cm.completed_at IS NULL \
     ORDER BY cm.id ASC";

/// Accept, complete, peek, and list operations over mission queues.
pub struct MissionQueueRepo;

impl MissionQueueRepo {
    /// Append a mission to the tail of a character's queue.
    ///
    /// Accepting a mission that is already queued, or that this character
    /// has already completed, leaves the queue as it is and still succeeds.
    /// Fails with [`CoreError::NotFound`] if either the character or the
    /// mission does not exist.
    pub async fn accept(
        pool: &PgPool,
        character_id: DbId,
        mission_id: DbId,
    ) -> Result<CharacterWithMissions, QueueError> {
        let mut tx = pool.begin().await?;

        let character = Self::lock_character(&mut tx, character_id).await?;

        // KEY SHARE keeps the mission from being deleted until we commit.
        let query = format!("SELECT {MISSION_COLUMNS} FROM missions WHERE id = $1 FOR KEY SHARE");
        let mission = sqlx::query_as::<_, Mission>(&query)
            .bind(mission_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Mission",
                id: mission_id,
            })?;

        let completed: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM character_missions \
             WHERE character_id = $1 AND mission_id = $2 AND completed_at IS NOT NULL)",
        )
        .bind(character_id)
        .bind(mission_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut queue = Self::lock_queue(&mut tx, character_id).await?;
        if completed {
            tracing::debug!(character_id, mission_id, "Mission already completed");
        } else if queue.enqueue(mission) {
            sqlx::query(
                "INSERT INTO character_missions (character_id, mission_id) \
                 VALUES ($1, $2) \
                 ON CONFLICT ON CONSTRAINT uq_character_missions_character_mission DO NOTHING",
            )
            .bind(character_id)
            .bind(mission_id)
            .execute(&mut *tx)
            .await?;
            tracing::debug!(character_id, mission_id, queue_len = queue.len(), "Mission accepted");
        } else {
            tracing::debug!(character_id, mission_id, "Mission already queued");
        }

        tx.commit().await?;
        Ok(CharacterWithMissions {
            character,
            missions: queue.into_vec(),
        })
    }

    /// Complete the oldest mission in a character's queue.
    ///
    /// Marks the front acceptance row completed and adds the mission's reward
    /// to the character's experience in one transaction. Fails with
    /// [`CoreError::EmptyQueue`] if nothing is queued, in which case nothing
    /// is written.
    pub async fn complete(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<CompletedMission, QueueError> {
        let mut tx = pool.begin().await?;

        Self::lock_character(&mut tx, character_id).await?;
        let mut queue = Self::lock_queue(&mut tx, character_id).await?;
        let mission = queue
            .dequeue()
            .ok_or(CoreError::EmptyQueue { character_id })?;

        sqlx::query(
            "UPDATE character_missions SET completed_at = NOW() \
             WHERE character_id = $1 AND mission_id = $2",
        )
        .bind(character_id)
        .bind(mission.id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE characters SET experience = experience + $2
             WHERE id = $1
             RETURNING {CHARACTER_COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(character_id)
            .bind(i64::from(mission.xp_reward))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(
            character_id,
            mission_id = mission.id,
            xp_reward = mission.xp_reward,
            experience = character.experience,
            remaining = queue.len(),
            "Mission completed"
        );

        Ok(CompletedMission {
            character: CharacterWithMissions {
                character,
                missions: queue.into_vec(),
            },
            mission,
        })
    }

    /// Return the oldest queued mission without removing it, or `None` if
    /// the queue is empty.
    pub async fn peek_front(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Option<Mission>, QueueError> {
        Self::ensure_character(pool, character_id).await?;
        let query = format!("{QUEUE_QUERY} LIMIT 1");
        let front = sqlx::query_as::<_, Mission>(&query)
            .bind(character_id)
            .fetch_optional(pool)
            .await?;
        Ok(front)
    }

    /// Return a snapshot of the full queue in acceptance order.
    pub async fn list_ordered(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<Mission>, QueueError> {
        Self::ensure_character(pool, character_id).await?;
        Ok(Self::fetch_missions(pool, character_id).await?)
    }

    /// Read a character's queued missions in acceptance order without
    /// checking that the character exists.
    pub async fn fetch_missions(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        sqlx::query_as::<_, Mission>(QUEUE_QUERY)
            .bind(character_id)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn ensure_character(pool: &PgPool, character_id: DbId) -> Result<(), QueueError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM characters WHERE id = $1)")
                .bind(character_id)
                .fetch_one(pool)
                .await?;
        if exists {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Character",
                id: character_id,
            }
            .into())
        }
    }

    /// Lock the character row for the rest of the transaction.
    async fn lock_character(
        tx: &mut Transaction<'_, Postgres>,
        character_id: DbId,
    ) -> Result<Character, QueueError> {
        let query =
            format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE id = $1 FOR UPDATE");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(character_id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Character",
                id: character_id,
            })?;
        Ok(character)
    }

    /// Load the queue inside the transaction, locking its acceptance rows so
    /// a concurrent mission delete cannot remove the front mid-completion.
    async fn lock_queue(
        tx: &mut Transaction<'_, Postgres>,
        character_id: DbId,
    ) -> Result<MissionQueue<Mission>, sqlx::Error> {
        let query = format!("{QUEUE_QUERY} FOR UPDATE OF cm");
        let missions = sqlx::query_as::<_, Mission>(&query)
            .bind(character_id)
            .fetch_all(&mut **tx)
            .await?;
        Ok(missions.into_iter().collect())
    }
}
