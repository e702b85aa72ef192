use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const TEAM_SIZE: usize = 4;

/// Response containing basic team information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub event_id: Option<Uuid>,
    pub name: String,
    pub members: Vec<String>,
    pub rating: f64,
    pub created_at: NaiveDateTime,
}

/// Envelope for a single team, as returned by the mutating endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamEnvelope {
    pub team: TeamResponse,
}

/// Envelope for the public ranking listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamListResponse {
    pub teams: Vec<TeamResponse>,
}

/// One entry of a team's rating history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RatingHistoryEntry {
    pub history_id: Uuid,
    pub round: i32,
    pub rating: f64,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Detailed team response with full rating history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamDetailResponse {
    pub team_id: Uuid,
    pub event_id: Option<Uuid>,
    pub name: String,
    pub members: Vec<String>,
    pub rating: f64,
    pub created_at: NaiveDateTime,
    pub history: Vec<RatingHistoryEntry>,
    pub total_rounds: i64,
}

/// Request payload for creating a new team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_members"))]
    pub members: Vec<String>,

    pub rating: f64,

    #[serde(default)]
    pub event_id: Option<Uuid>,
}

/// Request payload for updating a team's rating
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRatingRequest {
    pub rating: f64,
}

// Validation helper
fn validate_members(members: &[String]) -> Result<(), validator::ValidationError> {
    if members.len() != TEAM_SIZE {
        let mut err = validator::ValidationError::new("members_arity");
        err.message = Some("Exactly 4 member names are required".into());
        return Err(err);
    }

    if members.iter().any(|m| m.trim().is_empty()) {
        let mut err = validator::ValidationError::new("members_blank");
        err.message = Some("All 4 member names are required".into());
        return Err(err);
    }

    Ok(())
}

impl From<crate::models::Team> for TeamResponse {
    fn from(team: crate::models::Team) -> Self {
        Self {
            team_id: team.team_id,
            event_id: team.event_id,
            name: team.name,
            members: team.members,
            rating: team.rating,
            created_at: team.created_at,
        }
    }
}

impl From<crate::models::RatingHistory> for RatingHistoryEntry {
    fn from(row: crate::models::RatingHistory) -> Self {
        Self {
            history_id: row.history_id,
            round: row.round,
            rating: row.rating,
            note: row.note,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, members: Vec<&str>) -> CreateTeamRequest {
        CreateTeamRequest {
            name: name.to_string(),
            members: members.into_iter().map(String::from).collect(),
            rating: 1500.0,
            event_id: None,
        }
    }

    #[test]
    fn accepts_four_non_blank_members() {
        let req = request("Alpha", vec!["A", "B", "C", "D"]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_wrong_member_count() {
        let req = request("Alpha", vec!["A", "B", "C"]);
        assert!(req.validate().is_err());

        let req = request("Alpha", vec!["A", "B", "C", "D", "E"]);
        assert!(req.validate().is_err());

        let req = request("Alpha", vec![]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_blank_member_after_trim() {
        let req = request("Alpha", vec!["A", "  ", "C", "D"]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let req = request("", vec!["A", "B", "C", "D"]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn accepts_arbitrarily_long_name() {
        let name = "x".repeat(300);
        let req = request(&name, vec!["A", "B", "C", "D"]);
        assert!(req.validate().is_ok());
    }
}
