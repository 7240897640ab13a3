use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Reasons an enroll or withdraw request is refused. The display strings are
/// the `detail` messages clients see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("Activity is full")]
    ActivityFull,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read seed catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed catalog contains an activity with an empty name")]
    EmptyName,
    #[error("activity {0:?} appears more than once in the seed catalog")]
    DuplicateActivity(String),
    #[error("activity {0:?} has a capacity of zero")]
    ZeroCapacity(String),
    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },
    #[error("activity {activity:?} seeds {count} participants but only allows {max}")]
    OverCapacity {
        activity: String,
        count: usize,
        max: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("cannot parse listen address {0:?}")]
    InvalidAddress(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP-facing error rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::ActivityNotFound => Self::not_found(err.to_string()),
            SignupError::AlreadySignedUp
            | SignupError::NotRegistered
            | SignupError::ActivityFull => Self::bad_request(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_activity_maps_to_404() {
        let err = ApiError::from(SignupError::ActivityNotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail, "Activity not found");
    }

    #[test]
    fn roster_rejections_map_to_400() {
        for e in [
            SignupError::AlreadySignedUp,
            SignupError::NotRegistered,
            SignupError::ActivityFull,
        ] {
            assert_eq!(ApiError::from(e).status, StatusCode::BAD_REQUEST);
        }
    }
}
