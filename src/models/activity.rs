use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One extracurricular offering. The activity name is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Enrollment order, no duplicates.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

pub type ActivityCatalog = BTreeMap<String, Activity>;
