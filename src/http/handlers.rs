//! HTML page handlers.

use axum::{
    extract::{Form, State},
    http::Uri,
};

use crate::command::{create_command, remove_command};
use crate::forms::{from_pairs, CreateForm, FieldError, Operation, RemoveForm};
use crate::http::response::Page;
use crate::http::server::AppState;
use crate::views::pages::{self, CommandResult};
use crate::views::Flash;

fn flashes(errors: &[FieldError]) -> Vec<Flash> {
    errors.iter().map(|e| Flash::error(e.to_string())).collect()
}

fn invalid_fields(errors: &[FieldError]) -> String {
    errors.iter().map(FieldError::field).collect::<Vec<_>>().join(",")
}

pub async fn index() -> Page {
    Page::ok(pages::index())
}

pub async fn about() -> Page {
    Page::ok(pages::about())
}

pub async fn create_page(State(state): State<AppState>) -> Page {
    let form = &state.config.form;
    Page::ok(pages::create_form(
        &form.locations,
        form.default_user_count,
        None,
        &[],
    ))
}

pub async fn create_submit(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let submitted: CreateForm = from_pairs(pairs);
    let config = &state.config;

    match submitted.validate(&config.form) {
        Ok(request) => {
            let command = create_command(&request, &config.scripts);
            tracing::info!(
                conference = %request.conference_name,
                user_count = request.user_count,
                dry_run = request.dry_run,
                "Create command generated"
            );
            Page::ok(pages::command_result(&CommandResult {
                operation: Operation::Create,
                command: &command,
                conference_name: &request.conference_name,
                user_count: Some(request.user_count),
            }))
        }
        Err(errors) => {
            tracing::info!(
                errors = errors.len(),
                fields = %invalid_fields(&errors),
                "Create form rejected"
            );
            Page::rejected(pages::create_form(
                &config.form.locations,
                config.form.default_user_count,
                Some(&submitted),
                &flashes(&errors),
            ))
        }
    }
}

pub async fn remove_page() -> Page {
    Page::ok(pages::remove_form(None, &[]))
}

pub async fn remove_submit(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let submitted: RemoveForm = from_pairs(pairs);
    match submitted.validate() {
        Ok(request) => {
            let command = remove_command(&request, &state.config.scripts);
            tracing::info!(
                conference = %request.conference_name,
                force = request.force,
                dry_run = request.dry_run,
                "Remove command generated"
            );
            Page::ok(pages::command_result(&CommandResult {
                operation: Operation::Remove,
                command: &command,
                conference_name: &request.conference_name,
                user_count: None,
            }))
        }
        Err(errors) => {
            tracing::info!(
                errors = errors.len(),
                fields = %invalid_fields(&errors),
                "Remove form rejected"
            );
            Page::rejected(pages::remove_form(Some(&submitted), &flashes(&errors)))
        }
    }
}

pub async fn not_found(uri: Uri) -> Page {
    tracing::debug!(path = %uri.path(), "No page matched");
    Page::not_found(pages::not_found(uri.path()))
}
