//! Axum route handlers for browsing the career catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::catalog::CareerFilter;
use crate::errors::AppError;
use crate::models::career::CareerRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<CareerRecord>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<String>,
    pub total_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<String>,
    pub total_count: usize,
}

/// GET /api/careers
///
/// Lists the catalog, optionally narrowed by `category`, `skill`,
/// `experience_level` and `min_salary` query parameters.
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(filter): Query<CareerFilter>,
) -> Json<CareerListResponse> {
    let careers: Vec<CareerRecord> = state.catalog.search(&filter).into_iter().cloned().collect();
    Json(CareerListResponse {
        total_count: careers.len(),
        careers,
    })
}

/// GET /api/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CareerRecord>, AppError> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}

/// GET /api/categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let categories = state.catalog.categories();
    Json(CategoryListResponse {
        total_count: categories.len(),
        categories,
    })
}

/// GET /api/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    let skills = state.catalog.skills();
    Json(SkillListResponse {
        total_count: skills.len(),
        skills,
    })
}
