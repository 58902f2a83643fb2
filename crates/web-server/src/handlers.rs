use crate::{AppState, error::AppError};
use analytics::{DashboardOptions, DashboardViews};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::Uri,
    response::Html,
};
use core_types::Period;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

static INDEX_HTML: &str = include_str!("../static/index.html");

/// Body of a dashboard recomputation request.
///
/// `categories: None` selects every category, `Some([])` selects nothing.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardRequest {
    pub period: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// # GET /
/// The single dashboard page. Rendering happens client-side from the JSON
/// endpoints below.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// # GET /api/options
/// Selector options: periods, categories and their defaults.
pub async fn get_options(State(state): State<Arc<AppState>>) -> Json<DashboardOptions> {
    Json(state.options.clone())
}

/// # POST /api/dashboard
/// Recomputes all five views for the given selection.
pub async fn post_dashboard(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> Result<Json<DashboardViews>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let period = match request.period.as_deref() {
        Some(raw) => raw
            .parse::<Period>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => state.options.default_period,
    };
    let categories: HashSet<String> = match request.categories {
        Some(selected) => selected.into_iter().collect(),
        None => state.options.default_categories.iter().cloned().collect(),
    };

    let views = state.engine.compute_views(&state.table, period, &categories);
    Ok(Json(views))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
