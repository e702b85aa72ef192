use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use storage::{
    dto::team::{
        CreateTeamRequest, TeamDetailResponse, TeamEnvelope, TeamListResponse, TeamResponse,
        UpdateRatingRequest,
    },
    Database,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/teams",
    responses(
        (status = 200, description = "All teams ordered by rating descending, creation time ascending", body = TeamListResponse)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(db): State<Database>) -> WebResult<Response> {
    let teams = services::list_teams(db.read_pool()).await?;

    let response = TeamListResponse {
        teams: teams.into_iter().map(TeamResponse::from).collect(),
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(State(db): State<Database>, Path(id): Path<Uuid>) -> WebResult<Response> {
    let team = services::get_team(db.read_pool(), id).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    get,
    path = "/teams/{id}/detailed",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team with full rating history", body = TeamDetailResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team_detailed(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let team = services::get_team_detailed(db.read_pool(), id).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    post,
    path = "/teams",
    request_body = CreateTeamRequest,
    security(
        ("admin_token" = [])
    ),
    responses(
        (status = 201, description = "Team created successfully", body = TeamEnvelope),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    let team = services::create_team(db.write_pool(), &req).await?;

    let response = TeamEnvelope {
        team: TeamResponse::from(team),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    patch,
    path = "/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    request_body = UpdateRatingRequest,
    security(
        ("admin_token" = [])
    ),
    responses(
        (status = 200, description = "Rating updated and history round appended", body = TeamEnvelope),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn update_team_rating(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateRatingRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;
    req.validate()?;

    let team = services::update_rating(db.write_pool(), id, req.rating).await?;

    let response = TeamEnvelope {
        team: TeamResponse::from(team),
    };

    Ok(Json(response).into_response())
}
