//! Axum route handler for the recommendation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::ranker::recommend;
use crate::models::career::{MatchResult, UserProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<MatchResult>,
    pub total_careers_analyzed: usize,
    pub user_profile: UserProfile,
}

/// POST /recommend
///
/// Scores the submitted self-assessment against every career and returns the
/// top matches with their skill-gap breakdown.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(profile) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    if !profile.has_signal() {
        return Err(AppError::Validation(
            "At least one skill or interest must be provided".to_string(),
        ));
    }

    let recommendations = recommend(&profile, state.catalog.careers(), &state.weights);

    debug!(
        skills = profile.skills.len(),
        interests = profile.interests.len(),
        returned = recommendations.len(),
        "Scored recommendation request"
    );

    Ok(Json(RecommendationResponse {
        recommendations,
        total_careers_analyzed: state.catalog.len(),
        user_profile: profile,
    }))
}
