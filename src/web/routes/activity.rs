use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::{ApiError, ApiResult};
use crate::models::MessageResponse;
use crate::services::signup_service;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> ApiResult<String> {
    match query {
        Ok(Query(q)) => Ok(q.email),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "email query rejected");
            Err(ApiError::bad_request(rejection.body_text()))
        }
    }
}

pub async fn activity_signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let email = email_from(query)?;
    let message =
        signup_service::signup(&state.directory, state.capacity, &activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn activity_unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let email = email_from(query)?;
    let message = signup_service::unregister(&state.directory, &activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}
