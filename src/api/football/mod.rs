pub mod admin;
pub mod leagues;
pub mod matches;
pub mod realtime;
pub mod teams;

use crate::common::state::AppState;
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/leagues", get(leagues::fetch_all))
        .route("/league/{id}", get(leagues::fetch_matches))
        .route("/teams", get(teams::fetch_all))
        .route("/teams/search", get(teams::search))
        .route("/teams/{id}", get(teams::fetch_one))
        .route("/matches", get(matches::fetch_page))
        .route("/matches/{status}", get(matches::fetch_by_status))
        .route("/match/{id}", get(matches::fetch_one))
        .route("/ws", get(realtime::subscribe))
        .nest("/admin", admin_router())
}

fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/match", post(admin::create_match))
        .route(
            "/match/{id}",
            put(admin::update_match).delete(admin::delete_match),
        )
        .route("/match/{id}/score", patch(admin::update_match_score))
        .route("/team", post(admin::create_team))
        .route("/team/{id}", delete(admin::delete_team))
        .route("/league", post(admin::create_league))
        .route("/league/{id}", delete(admin::delete_league))
}

pub async fn index() -> Json<Value> {
    Json(json!({ "status": "Football API Running" }))
}
