//! JSON endpoints sharing the form validation and command builders.

use axum::{
    extract::{Form, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::command::{create_command, remove_command};
use crate::forms::{from_pairs, CreateForm, FieldError, Operation, RemoveForm};
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub operation: &'static str,
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct FieldErrorBody {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<FieldErrorBody>,
}

impl From<Vec<FieldError>> for ErrorResponse {
    fn from(errors: Vec<FieldError>) -> Self {
        Self {
            errors: errors
                .into_iter()
                .map(|e| FieldErrorBody {
                    field: e.field(),
                    message: e.to_string(),
                })
                .collect(),
        }
    }
}

fn respond(operation: Operation, result: Result<String, Vec<FieldError>>) -> Response {
    match result {
        Ok(command) => (
            StatusCode::OK,
            Json(CommandResponse {
                operation: operation.as_str(),
                command,
            }),
        )
            .into_response(),
        Err(errors) => {
            tracing::debug!(operation = operation.as_str(), errors = errors.len(), "API request rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse::from(errors))).into_response()
        }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form: CreateForm = from_pairs(pairs);
    let result = form
        .validate(&state.config.form)
        .map(|req| create_command(&req, &state.config.scripts));
    respond(Operation::Create, result)
}

pub async fn remove(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form: RemoveForm = from_pairs(pairs);
    let result = form
        .validate()
        .map(|req| remove_command(&req, &state.config.scripts));
    respond(Operation::Remove, result)
}
