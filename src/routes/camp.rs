//! Activity, camper, and signup routes.

use crate::handlers::{activities, campers, signups};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn camp_routes(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list))
        .route("/activities/:id", delete(activities::delete))
        .route("/campers", get(campers::list).post(campers::create))
        .route("/campers/:id", get(campers::read).patch(campers::update))
        .route("/signups", post(signups::create))
        .with_state(state)
}
