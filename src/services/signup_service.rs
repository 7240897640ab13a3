use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::errors::SignupError;

/// Whether a signup is refused once a roster reaches `max_participants`.
///
/// Unenforced is the default and matches the historical behavior of the
/// service, where capacity is only advisory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Unenforced,
    Enforced,
}

/// Appends `email` to the activity's roster and returns the confirmation message.
pub fn signup(
    directory: &ActivityDirectory,
    capacity: CapacityPolicy,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let outcome = directory
        .update(activity_name, |record| {
            if record.has_participant(email) {
                return Err(SignupError::AlreadySignedUp);
            }
            if capacity == CapacityPolicy::Enforced && record.is_full() {
                return Err(SignupError::ActivityFull);
            }
            record.participants.push(email.to_string());
            Ok(record.participants.len())
        })
        .unwrap_or(Err(SignupError::ActivityNotFound));

    match outcome {
        Ok(roster_size) => {
            info!(activity = %activity_name, email = %email, roster_size, "signup accepted");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, reason = %e, "signup rejected");
            Err(e)
        }
    }
}

/// Removes `email` from the activity's roster and returns the confirmation message.
pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let outcome = directory
        .update(activity_name, |record| {
            let Some(pos) = record.participants.iter().position(|p| p == email) else {
                return Err(SignupError::NotRegistered);
            };
            record.participants.remove(pos);
            Ok(record.participants.len())
        })
        .unwrap_or(Err(SignupError::ActivityNotFound));

    match outcome {
        Ok(roster_size) => {
            info!(activity = %activity_name, email = %email, roster_size, "unregister accepted");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, reason = %e, "unregister rejected");
            Err(e)
        }
    }
}
