use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{Result, RosterError};
use crate::models::{Activity, ActivityCatalog, Enrollment};

/// In-memory roster of every activity, shared by all request handlers.
///
/// Each enroll/withdraw runs its lookup, checks and mutation under one write
/// lock, so two concurrent signups can never both take the last spot. Reads
/// clone a snapshot under the read lock.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    activities: Arc<RwLock<ActivityCatalog>>,
    seed: Arc<ActivityCatalog>,
}

impl ActivityStore {
    pub fn new(seed: ActivityCatalog) -> Self {
        Self {
            activities: Arc::new(RwLock::new(seed.clone())),
            seed: Arc::new(seed),
        }
    }

    pub async fn list_activities(&self) -> ActivityCatalog {
        self.activities.read().await.clone()
    }

    pub async fn activity(&self, activity_name: &str) -> Result<Activity> {
        self.activities
            .read()
            .await
            .get(activity_name)
            .cloned()
            .ok_or(RosterError::NotFound)
    }

    pub async fn enroll(&self, activity_name: &str, email: &str) -> Result<Enrollment> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?;

        // Duplicate check wins over capacity: a full roster still reports AlreadyEnrolled.
        if activity.is_enrolled(email) {
            return Err(RosterError::AlreadyEnrolled);
        }
        if activity.is_full() {
            return Err(RosterError::CapacityExceeded);
        }

        activity.participants.push(email.to_string());
        Ok(Enrollment {
            activity_name: activity_name.to_string(),
            email: email.to_string(),
        })
    }

    pub async fn withdraw(&self, activity_name: &str, email: &str) -> Result<Enrollment> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::NotEnrolled)?;
        activity.participants.remove(position);

        Ok(Enrollment {
            activity_name: activity_name.to_string(),
            email: email.to_string(),
        })
    }

    /// Restores the catalog the store was constructed with.
    pub async fn reset(&self) {
        *self.activities.write().await = (*self.seed).clone();
    }
}
