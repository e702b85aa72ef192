use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use storage::Database;

use super::handlers::{create_team, get_team, get_team_detailed, list_teams, update_team_rating};
use crate::middleware::auth::{require_admin, AdminToken};

pub fn routes(admin_token: AdminToken) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_team))
        .route("/:id", patch(update_team_rating))
        .route_layer(middleware::from_fn_with_state(admin_token, require_admin));

    Router::new()
        .route("/", get(list_teams))
        .route("/:id", get(get_team))
        .route("/:id/detailed", get(get_team_detailed))
        .merge(protected)
}
