use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::services::signup_service;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

fn require_email(query: EmailQuery) -> Result<String, Response> {
    // Presence is the only check made on the address.
    match query.email {
        Some(email) => Ok(email),
        None => {
            warn!("signup command without email");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "detail": "email query parameter is required" })),
            )
                .into_response())
        }
    }
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Response {
    let email = match require_email(query) {
        Ok(email) => email,
        Err(resp) => return resp,
    };

    match signup_service::signup(&state.store, &activity_name, &email).await {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Response {
    let email = match require_email(query) {
        Ok(email) => email,
        Err(resp) => return resp,
    };

    match signup_service::unregister(&state.store, &activity_name, &email).await {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => e.into_response(),
    }
}
