use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub event_id: Option<Uuid>,
    pub name: String,
    /// Exactly four member names, trimmed at creation time.
    pub members: Vec<String>,
    pub rating: f64,
    pub created_at: chrono::NaiveDateTime,
}
