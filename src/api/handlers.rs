//! HTTP request handlers for the shift roster API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Schedule};
use crate::render::render_grid;
use crate::scheduling::RandomSampler;
use crate::store::{SelectionState, validate_name};

use super::request::{EmployeeRequest, ScheduleRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/config", get(config_handler))
        .route("/schedule", post(schedule_handler))
        .route("/schedule/grid", post(grid_handler))
        .route("/employees", get(list_employees_handler).post(add_employee_handler))
        .route("/employees/:name", put(update_employee_handler))
        .route("/collaborators", get(collaborators_handler))
        .route("/selection", get(get_selection_handler).put(put_selection_handler))
        .with_state(state)
}

/// Handler for GET /config: the axes and limits schedules are built with.
async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().clone())
}

/// Handler for POST /schedule endpoint.
///
/// Accepts a roster (or falls back to the stored one) and returns the
/// generated schedule as JSON.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_generation(&state, request).await {
        Ok(schedule) => {
            info!(
                correlation_id = %correlation_id,
                schedule_id = %schedule.schedule_id(),
                duration_us = schedule.audit_trace().duration_us,
                "Schedule generated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(schedule),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /schedule/grid endpoint.
///
/// Same input as `/schedule`; returns the plain-text grid.
async fn grid_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grid request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_generation(&state, request).await {
        Ok(schedule) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_grid(&schedule),
        )
            .into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees: every stored record in file order.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let _guard = state.storage_lock().lock().await;

    match state.records().load() {
        Ok(employees) => json_response(StatusCode::OK, employees),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /employees: validates and stores a new record.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add employee request");

    let mut employee: Employee = match parse_payload(correlation_id, payload) {
        Ok(request) => request.into(),
        Err(response) => return response,
    };
    employee.name = employee.name.trim().to_string();

    let _guard = state.storage_lock().lock().await;
    match state.records().add(employee.clone()) {
        Ok(()) => json_response(StatusCode::CREATED, employee),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /employees/:name: replaces the record named in the path.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(original_name): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee = %original_name,
        "Processing update employee request"
    );

    let mut employee: Employee = match parse_payload(correlation_id, payload) {
        Ok(request) => request.into(),
        Err(response) => return response,
    };
    employee.name = employee.name.trim().to_string();

    let _guard = state.storage_lock().lock().await;
    match state.records().update(&original_name, employee.clone()) {
        Ok(()) => json_response(StatusCode::OK, employee),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /collaborators: `"None"` followed by every stored name.
async fn collaborators_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let _guard = state.storage_lock().lock().await;

    match state.records().collaborator_options() {
        Ok(options) => json_response(StatusCode::OK, options),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /selection: the choice for every stored employee.
async fn get_selection_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let _guard = state.storage_lock().lock().await;

    let result = state.records().load().and_then(|roster| {
        let selected = SelectionState::load(state.selection_path())?.selected_names(&roster);
        Ok(SelectionState::from_choices(&roster, &selected))
    });
    match result {
        Ok(selection) => json_response(StatusCode::OK, selection),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /selection: remembers a `{name: bool}` map.
async fn put_selection_handler(
    State(state): State<AppState>,
    payload: Result<Json<SelectionState>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing selection update");

    let selection = match parse_payload(correlation_id, payload) {
        Ok(selection) => selection,
        Err(response) => return response,
    };

    let _guard = state.storage_lock().lock().await;
    match selection.save(state.selection_path()) {
        Ok(()) => json_response(StatusCode::OK, selection),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Turns a JSON extraction result into a request, or a 400 response.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(req)) => return Ok(req),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err((
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response())
}

/// Resolves the roster and runs the engine with a per-request sampler.
async fn perform_generation(state: &AppState, request: ScheduleRequest) -> EngineResult<Schedule> {
    let mut sampler = match request.seed {
        Some(seed) => RandomSampler::seeded(seed),
        None => RandomSampler::from_entropy(),
    };

    let (roster, selected) = match request.into_parts() {
        (Some(roster), selected) => {
            validate_posted_names(&roster)?;
            (roster, selected.unwrap_or_default())
        }
        (None, selected) => {
            let _guard = state.storage_lock().lock().await;
            stored_roster(state, selected)?
        }
    };

    state.engine().generate(&roster, &selected, &mut sampler)
}

/// Posted names must pass the same rules as stored ones.
fn validate_posted_names(roster: &[Employee]) -> EngineResult<()> {
    for (index, employee) in roster.iter().enumerate() {
        validate_name(&employee.name).map_err(|err| match err {
            EngineError::InvalidEmployee { message, .. } => EngineError::InvalidEmployee {
                field: format!("employees[{}].name", index),
                message,
            },
            other => other,
        })?;
    }
    Ok(())
}

/// The stored roster, selected by `selected` or else by the remembered selection.
fn stored_roster(
    state: &AppState,
    selected: Option<HashSet<String>>,
) -> EngineResult<(Vec<Employee>, HashSet<String>)> {
    let roster = state.records().load()?;
    let selected = match selected {
        Some(selected) => selected,
        None => SelectionState::load(state.selection_path())?.selected_names(&roster),
    };
    Ok((roster, selected))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
