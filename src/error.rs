use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Caller-facing outcomes of a roster operation that did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled,

    #[error("Activity is full")]
    CapacityExceeded,

    #[error("Student is not registered for this activity")]
    NotEnrolled,
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::NotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadyEnrolled
            | RosterError::CapacityExceeded
            | RosterError::NotEnrolled => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

/// Problems with a seed catalog supplied at startup.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog entry '{activity}': {message}")]
    Invalid { activity: String, message: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
