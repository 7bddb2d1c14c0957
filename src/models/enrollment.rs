use serde::Serialize;

/// Confirmation of a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    pub activity_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationMessage {
    pub message: String,
}
