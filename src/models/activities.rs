use serde::{Deserialize, Serialize};

/// One activity as it appears in listings, keyed externally by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    // Signup order.
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// A catalog entry as stored in the seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeedRow {
    pub name: String,
    #[serde(flatten)]
    pub record: ActivityRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
