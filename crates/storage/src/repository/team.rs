use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::{CreateTeamRequest, RatingHistoryEntry, TeamDetailResponse};
use crate::error::{Result, StorageError};
use crate::models::{RatingHistory, Team};

const TEAM_COLUMNS: &str = "team_id, event_id, name, members, rating, created_at";

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all teams ranked by rating, oldest first on ties.
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams ORDER BY rating DESC, created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Find team by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE team_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Get detailed team info with its full rating history
    pub async fn find_by_id_detailed(&self, id: Uuid) -> Result<TeamDetailResponse> {
        let team = self.find_by_id(id).await?;

        let history = sqlx::query_as::<_, RatingHistory>(
            r#"
            SELECT history_id, team_id, round, rating, note, created_at
            FROM rating_history
            WHERE team_id = $1
            ORDER BY round ASC
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let total_rounds = history.len() as i64;

        Ok(TeamDetailResponse {
            team_id: team.team_id,
            event_id: team.event_id,
            name: team.name,
            members: team.members,
            rating: team.rating,
            created_at: team.created_at,
            history: history.into_iter().map(RatingHistoryEntry::from).collect(),
            total_rounds,
        })
    }

    /// Create a new team. Member names are stored trimmed.
    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let members: Vec<String> = req.members.iter().map(|m| m.trim().to_string()).collect();

        let team = sqlx::query_as::<_, Team>(&format!(
            r#"
            INSERT INTO teams (name, members, rating, event_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&members)
        .bind(req.rating)
        .bind(req.event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(team)
    }

    /// Update a team's rating and append the next rating-history row.
    ///
    /// Both writes and the max-round read run in one transaction. The UPDATE
    /// takes a row lock on the team, so concurrent updates to the same team
    /// serialize and each one sees the previous round committed; a failed
    /// history insert rolls the rating change back.
    pub async fn update_rating(&self, id: Uuid, rating: f64) -> Result<Team> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(&format!(
            r#"
            UPDATE teams
            SET rating = $2
            WHERE team_id = $1
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(rating)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let max_round: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT round FROM rating_history
            WHERE team_id = $1
            ORDER BY round DESC
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let next_round = max_round.unwrap_or(0) + 1;

        let inserted = sqlx::query(
            "INSERT INTO rating_history (team_id, round, rating) VALUES ($1, $2, $3)",
        )
        .bind(id)
        .bind(next_round)
        .bind(rating)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                return Err(StorageError::ConstraintViolation(format!(
                    "Round {next_round} already recorded for team {id}"
                )));
            }
            return Err(err);
        }

        tx.commit().await?;

        Ok(team)
    }
}
