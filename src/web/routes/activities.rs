use axum::{extract::State, Json};

use crate::database::DirectorySnapshot;
use crate::web::state::AppState;

pub async fn activities_handler(State(state): State<AppState>) -> Json<DirectorySnapshot> {
    Json(state.directory.snapshot())
}
