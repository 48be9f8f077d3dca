//! Repository for the `missions` table.

use questboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::{CreateMission, Mission};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, description, xp_reward, created_at";

/// Provides create/read/delete operations for missions. Missions have no
/// update path; they are immutable once created.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (description, xp_reward)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.description)
            .bind(input.xp_reward)
            .fetch_one(pool)
            .await
    }

    /// Find a mission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all missions, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id ASC");
        sqlx::query_as::<_, Mission>(&query).fetch_all(pool).await
    }

    /// Delete a mission after removing it from every character's queue and
    /// completion history.
    ///
    /// Both steps run in one transaction. Each affected queue keeps the
    /// relative order of its remaining missions, since order is the
    /// acceptance sequence and no other row is rewritten. Returns `true` if
    /// the mission existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM missions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(false);
        }

        let released = sqlx::query("DELETE FROM character_missions WHERE mission_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(mission_id = id, released, "Deleted mission");
        Ok(true)
    }
}
