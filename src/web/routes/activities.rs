use axum::{extract::State, Json};

use crate::models::ActivityCatalog;
use crate::services::signup_service;
use crate::web::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(signup_service::list_activities(&state.store).await)
}
