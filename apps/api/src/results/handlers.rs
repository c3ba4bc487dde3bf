use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::playability::form::PlayerForm;
use crate::playability::scorer::score;
use crate::results::models::{
    ClubPreferences, EmailReceipt, Feedback, FeedbackSummary, NewFeedback, SavedCalculation,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

/// POST /api/v1/calculations
pub async fn handle_save_calculation(
    State(state): State<AppState>,
    Json(form): Json<PlayerForm>,
) -> Result<(StatusCode, Json<SavedCalculation>), AppError> {
    let profile = form.into_profile()?;
    let result = score(&profile);
    let saved = state.sink.save(profile, result).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/calculations/:id
pub async fn handle_get_calculation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedCalculation>, AppError> {
    Ok(Json(state.sink.get(id).await?))
}

/// PATCH /api/v1/calculations/:id/preferences
pub async fn handle_attach_preferences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(preferences): Json<ClubPreferences>,
) -> Result<Json<SavedCalculation>, AppError> {
    Ok(Json(state.sink.attach_preferences(id, preferences).await?))
}

/// POST /api/v1/calculations/:id/email
pub async fn handle_email_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EmailRequest>,
) -> Result<(StatusCode, Json<EmailReceipt>), AppError> {
    let receipt = state.sink.email(id, &req.email).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// POST /api/v1/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<NewFeedback>,
) -> Result<(StatusCode, Json<Feedback>), AppError> {
    let feedback = state.sink.record_feedback(req).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/v1/feedback
pub async fn handle_list_feedback(
    State(state): State<AppState>,
) -> Result<Json<FeedbackSummary>, AppError> {
    Ok(Json(state.sink.list_feedback().await?))
}

/// GET /api/v1/emails
pub async fn handle_list_emails(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmailReceipt>>, AppError> {
    Ok(Json(state.sink.queued_emails().await?))
}
