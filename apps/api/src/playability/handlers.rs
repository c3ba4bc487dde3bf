use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::playability::fitting::fitting_notes;
use crate::playability::form::PlayerForm;
use crate::playability::models::{PlayabilityResult, PlayerProfile, ScoreBreakdown};
use crate::playability::scorer::{breakdown, score};

/// Everything the results page shows for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct PlayabilityResponse {
    pub result: PlayabilityResult,
    pub breakdown: ScoreBreakdown,
    pub fitting_notes: Vec<String>,
    pub pro_tip: String,
}

impl PlayabilityResponse {
    pub fn for_profile(profile: &PlayerProfile) -> Self {
        let result = score(profile);
        let pro_tip = result.category.pro_tip().to_string();
        Self {
            breakdown: breakdown(profile),
            fitting_notes: fitting_notes(&profile.fitting, &profile.adjustments),
            pro_tip,
            result,
        }
    }
}

/// POST /api/v1/playability
pub async fn handle_score(
    Json(form): Json<PlayerForm>,
) -> Result<Json<PlayabilityResponse>, AppError> {
    let profile = form.into_profile()?;
    let response = PlayabilityResponse::for_profile(&profile);
    debug!(
        factor = response.result.factor,
        category = %response.result.category,
        "Scored playability"
    );
    Ok(Json(response))
}
