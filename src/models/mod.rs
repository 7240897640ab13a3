pub mod activities;

pub use activities::{ActivityRecord, ActivitySeedRow, MessageResponse};
