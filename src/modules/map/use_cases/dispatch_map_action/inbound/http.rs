use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use thiserror::Error;

use crate::modules::map::core::mutations::MutationError;
use crate::modules::map::use_cases::dispatch_map_action::action::MapAction;
use crate::modules::map::use_cases::dispatch_map_action::handler;
use crate::shell::state::AppState;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match self {
            ApplicationError::Mutation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::debug!(%status, error = %self, "map request rejected");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Deserialize)]
pub struct FlagBody {
    pub value: bool,
}

#[derive(Deserialize)]
pub struct CommitBody {
    pub mutation: String,
    pub value: bool,
}

pub async fn set_add_mode(
    State(state): State<AppState>,
    body: Result<Json<FlagBody>, JsonRejection>,
) -> Result<StatusCode, ApplicationError> {
    let Json(body) = body?;
    handler::set_add_mode(&mut *state.store.write().await, body.value);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_map_ready(State(state): State<AppState>) -> StatusCode {
    handler::set_map_ready(&mut *state.store.write().await);
    StatusCode::NO_CONTENT
}

pub async fn set_show_meetups(
    State(state): State<AppState>,
    body: Result<Json<FlagBody>, JsonRejection>,
) -> Result<StatusCode, ApplicationError> {
    let Json(body) = body?;
    handler::set_show_meetups(&mut *state.store.write().await, body.value);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn dispatch(
    State(state): State<AppState>,
    body: Result<Json<MapAction>, JsonRejection>,
) -> Result<StatusCode, ApplicationError> {
    let Json(action) = body?;
    handler::dispatch(&mut *state.store.write().await, action);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn commit(
    State(state): State<AppState>,
    body: Result<Json<CommitBody>, JsonRejection>,
) -> Result<StatusCode, ApplicationError> {
    let Json(body) = body?;
    state
        .store
        .write()
        .await
        .commit_named(&body.mutation, body.value)?;
    Ok(StatusCode::NO_CONTENT)
}
