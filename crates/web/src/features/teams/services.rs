use sqlx::PgPool;
use storage::{
    dto::team::{CreateTeamRequest, TeamDetailResponse},
    error::Result,
    models::Team,
    repository::team::TeamRepository,
};
use uuid::Uuid;

/// List all teams ranked by rating
pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

/// Get team by ID
pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get team with its full rating history
pub async fn get_team_detailed(pool: &PgPool, id: Uuid) -> Result<TeamDetailResponse> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id_detailed(id).await
}

/// Create a new team
pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.create(request).await
}

/// Update a team's rating and append the next history round
pub async fn update_rating(pool: &PgPool, id: Uuid, rating: f64) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.update_rating(id, rating).await
}
