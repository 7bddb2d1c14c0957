use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::Result;
use crate::models::{ActivityCatalog, ConfirmationMessage};

pub async fn list_activities(store: &ActivityStore) -> ActivityCatalog {
    store.list_activities().await
}

pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<ConfirmationMessage> {
    match store.enroll(activity_name, email).await {
        Ok(enrollment) => {
            info!(activity = %enrollment.activity_name, email = %enrollment.email, "signup_ok");
            Ok(ConfirmationMessage {
                message: format!(
                    "Signed up {} for {}",
                    enrollment.email, enrollment.activity_name
                ),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup_rejected");
            Err(e)
        }
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<ConfirmationMessage> {
    match store.withdraw(activity_name, email).await {
        Ok(enrollment) => {
            info!(activity = %enrollment.activity_name, email = %enrollment.email, "unregister_ok");
            Ok(ConfirmationMessage {
                message: format!(
                    "Unregistered {} from {}",
                    enrollment.email, enrollment.activity_name
                ),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister_rejected");
            Err(e)
        }
    }
}
