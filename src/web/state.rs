use std::sync::Arc;

use crate::database::ActivityDirectory;
use crate::services::CapacityPolicy;

/// Shared handler state. Each router owns its own directory, so tests get
/// isolation by building a fresh one.
#[derive(Debug, Clone)]
pub struct AppState {
    pub directory: Arc<ActivityDirectory>,
    pub capacity: CapacityPolicy,
}

impl AppState {
    pub fn new(directory: ActivityDirectory, capacity: CapacityPolicy) -> Self {
        Self {
            directory: Arc::new(directory),
            capacity,
        }
    }
}
