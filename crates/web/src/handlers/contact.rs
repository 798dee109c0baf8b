//! Contact form handlers.
//!
//! The HTML form posts to `/contact` and always gets the page back with an
//! inline status; `/api/v1/contact` runs the same flow for JSON clients and
//! reports failures through [`AppError`].

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use fomo_core::contact::{ContactForm, FormErrorKind, FormState, InvalidForm};
use fomo_relay::RelayError;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult, PageResult};
use crate::extract::ApiJson;
use crate::handlers::render;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::ContactTemplate;

/// Body of a successful `POST /api/v1/contact`.
#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub status: &'static str,
}

/// GET /contact
pub async fn show() -> PageResult<Html<String>> {
    render(&ContactTemplate::new(FormState::idle()))
}

/// POST /contact
///
/// Success clears the form; validation, rejection and network failures
/// re-render it with the visitor's input and the matching message.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> PageResult<Html<String>> {
    let form = form.normalized();
    let outcome = relay_submission(&state, &form)
        .await
        .map_err(FormErrorKind::from);

    render(&ContactTemplate::new(FormState::resolve(form, outcome)))
}

/// POST /api/v1/contact
pub async fn submit_json(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> AppResult<impl IntoResponse> {
    let form = form.normalized();
    relay_submission(&state, &form).await?;

    Ok(Json(DataResponse {
        data: ContactAccepted { status: "success" },
    }))
}

/// Why a submission did not reach the studio.
#[derive(Debug, thiserror::Error)]
enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] InvalidForm),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Invalid(invalid) => AppError::Core(invalid.into()),
            SubmissionError::Relay(relay) => AppError::Relay(relay),
        }
    }
}

/// The status shown under the HTML form.
impl From<SubmissionError> for FormErrorKind {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Invalid(invalid) => invalid.into(),
            SubmissionError::Relay(relay) => relay.form_error_kind(),
        }
    }
}

/// Validate a submission and hand it to the relay, exactly once.
///
/// Only the submission id and the selected service are logged; the
/// visitor's message never is.
async fn relay_submission(state: &AppState, form: &ContactForm) -> Result<(), SubmissionError> {
    if let Err(err) = form.check() {
        tracing::debug!(error = %err, "Contact submission failed validation");
        return Err(err.into());
    }

    let submission_id = Uuid::now_v7();
    tracing::info!(
        %submission_id,
        service = form.service.label(),
        has_brand = !form.brand.is_empty(),
        "Relaying contact submission"
    );

    match state.relay.submit(form).await {
        Ok(receipt) => {
            tracing::info!(
                %submission_id,
                relay_message = receipt.message.as_deref().unwrap_or(""),
                "Contact submission delivered"
            );
            Ok(())
        }
        Err(err) => {
            tracing::warn!(%submission_id, error = %err, "Contact submission failed");
            Err(err.into())
        }
    }
}
