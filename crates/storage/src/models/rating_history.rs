use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Append-only record of a team's rating at a given round.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RatingHistory {
    pub history_id: Uuid,
    pub team_id: Uuid,
    pub round: i32,
    pub rating: f64,
    pub note: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
