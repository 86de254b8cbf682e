use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use deskbooker_core::page::{Confirmation, NO_DESK_AVAILABLE};
use deskbooker_core::{
    ActionOutcome, BookDeskPage, BookingError, BookingForm, BookingProcessor, BookingResult,
    DeskRepository, ModelState, RepositoryError, ResultCode,
};
use deskbooker_http::error::AppError;
use serde_json::json;

use super::models::{Availability, AvailabilityQuery};
use super::views::{self, CONFIRMATION_PATH};
use crate::utils;

/// Collaborators shared by the desk handlers.
#[derive(Clone)]
pub struct DesksState {
    pub processor: Arc<dyn BookingProcessor>,
    pub inventory: Arc<dyn DeskRepository>,
}

/// Routes of the desks module, relative to its mount point.
pub fn router(state: DesksState) -> Router {
    Router::new()
        .route("/book", get(show_form).post(submit_form))
        .route("/confirmation", get(show_confirmation))
        .route("/bookings", post(create_booking))
        .route("/available", get(available_desks))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "desks module is healthy"
}

async fn show_form() -> Html<String> {
    views::book_form(&BookingForm::default(), &ModelState::default())
}

/// Form post: re-render with errors, or redirect to the confirmation page.
async fn submit_form(
    State(state): State<DesksState>,
    Form(form): Form<BookingForm>,
) -> Result<Response, AppError> {
    let mut page = BookDeskPage::new(state.processor.as_ref());
    page.bind(&form);

    let outcome = page.on_submit().map_err(booking_error)?;

    let prefix = utils::log_prefix("desks");
    match outcome {
        ActionOutcome::Rerender => {
            tracing::info!(
                target: "deskbooker.routes",
                %prefix,
                errors = page.model_state.len(),
                "booking form re-rendered"
            );
            Ok(views::book_form(&form, &page.model_state).into_response())
        }
        ActionOutcome::RedirectToConfirmation(confirmation) => {
            tracing::info!(
                target: "deskbooker.routes",
                %prefix,
                booking_id = %confirmation.booking_id,
                "redirecting to confirmation"
            );
            Ok(Redirect::to(&confirmation_location(&confirmation)).into_response())
        }
    }
}

async fn show_confirmation(Query(confirmation): Query<Confirmation>) -> Html<String> {
    views::confirmation(&confirmation)
}

/// JSON booking endpoint.
async fn create_booking(
    State(state): State<DesksState>,
    Json(form): Json<BookingForm>,
) -> Result<(StatusCode, Json<BookingResult>), AppError> {
    let (request, model_state) = form.to_request();
    if !model_state.is_valid() {
        return Err(AppError::validation(
            validation_details(&model_state),
            "booking request is invalid",
        ));
    }

    let result = state
        .processor
        .process(request.as_ref())
        .map_err(booking_error)?;

    match result.code {
        ResultCode::Success { .. } => Ok((StatusCode::CREATED, Json(result))),
        ResultCode::NoDesksAvailable => Err(AppError::conflict(
            vec![json!({ "field": "date", "date": result.date, "error": "no_desk_available" })],
            NO_DESK_AVAILABLE,
        )),
    }
}

async fn available_desks(
    State(state): State<DesksState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Availability>, AppError> {
    let desks = state
        .inventory
        .available_desks(query.date)
        .map_err(|err| booking_error(err.into()))?;

    Ok(Json(Availability {
        date: query.date,
        desks,
    }))
}

/// `/api/desks/confirmation?booking_id=…&first_name=…&date=…`
fn confirmation_location(confirmation: &Confirmation) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("booking_id", &confirmation.booking_id.to_string())
        .append_pair("first_name", &confirmation.first_name)
        .append_pair("date", &confirmation.date.to_string())
        .finish();
    format!("{CONFIRMATION_PATH}?{query}")
}

fn validation_details(state: &ModelState) -> Vec<serde_json::Value> {
    state
        .iter()
        .map(|(field, messages)| json!({ "field": field, "errors": messages }))
        .collect()
}

fn booking_error(err: BookingError) -> AppError {
    match err {
        BookingError::MissingArgument { .. } => AppError::bad_request(err.to_string()),
        BookingError::Repository(RepositoryError::DeskAlreadyBooked { desk_id, date }) => {
            AppError::conflict(
                vec![json!({ "field": "date", "desk_id": desk_id, "date": date })],
                format!("desk {desk_id} is already booked on {date}"),
            )
        }
        BookingError::Repository(other) => {
            AppError::Internal(anyhow::Error::new(other).context("desk store failure"))
        }
    }
}
