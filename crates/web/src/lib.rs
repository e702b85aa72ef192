use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod middleware;

use middleware::auth::AdminToken;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::get_team_detailed,
        features::teams::handlers::create_team,
        features::teams::handlers::update_team_rating,
    ),
    components(
        schemas(
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::UpdateRatingRequest,
            storage::dto::team::TeamResponse,
            storage::dto::team::TeamEnvelope,
            storage::dto::team::TeamListResponse,
            storage::dto::team::TeamDetailResponse,
            storage::dto::team::RatingHistoryEntry,
            storage::models::Team,
            storage::models::RatingHistory,
        )
    ),
    tags(
        (name = "teams", description = "Team ranking and rating history endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_token",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new(
                            middleware::auth::ADMIN_TOKEN_HEADER,
                        ),
                    ),
                ),
            )
        }
    }
}

/// Assemble the full application router.
pub fn app(db: Database, admin_token: AdminToken) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/teams", features::teams::routes::routes(admin_token))
        .layer(cors)
        .with_state(db)
}
