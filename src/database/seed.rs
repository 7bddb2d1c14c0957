use std::collections::HashSet;
use std::path::Path;

use crate::error::SeedError;
use crate::models::{Activity, ActivityCatalog};

const DEFAULT_ACTIVITIES: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball league and practice",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn and play tennis with fellow students",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        12,
        &["lucas@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and sculpture techniques",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &["isabella@mergington.edu"],
    ),
    (
        "Drama Club",
        "Theater production and performance skills",
        "Fridays, 4:00 PM - 5:30 PM",
        25,
        &["mason@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop critical thinking and public speaking skills",
        "Mondays, 3:30 PM - 5:00 PM",
        16,
        &["noah@mergington.edu"],
    ),
    (
        "Science Club",
        "Explore scientific experiments and research projects",
        "Thursdays, 3:30 PM - 5:00 PM",
        20,
        &["ella@mergington.edu", "liam@mergington.edu"],
    ),
];

/// The catalog the school starts every term with.
pub fn default_catalog() -> ActivityCatalog {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

/// Reads a catalog from a JSON object of `name -> activity`, the same shape
/// `GET /activities` returns.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<ActivityCatalog, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog: ActivityCatalog = serde_json::from_str(&raw)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &ActivityCatalog) -> Result<(), SeedError> {
    for (name, activity) in catalog {
        let invalid = |message: &str| SeedError::Invalid {
            activity: name.clone(),
            message: message.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("activity name must not be empty"));
        }
        if activity.max_participants == 0 {
            return Err(invalid("max_participants must be positive"));
        }
        if activity.participants.len() > activity.max_participants as usize {
            return Err(invalid("more participants than max_participants"));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = activity
            .participants
            .iter()
            .find(|p| !seen.insert(p.as_str()))
        {
            return Err(invalid(&format!("duplicate participant {}", dup)));
        }
    }
    Ok(())
}
