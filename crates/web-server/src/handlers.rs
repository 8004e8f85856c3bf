use crate::{error::AppError, AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, Request, State,
    },
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use core_types::{Category, StrategicReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// The success envelope, `{ success: true, data }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisQuery {
    /// Restricts `details` to one quadrant.
    #[serde(default, alias = "category")]
    pub aspect: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default, alias = "category")]
    pub aspect: Option<String>,
    /// Accepted for client compatibility; the analysis has a single timeframe.
    #[serde(default)]
    pub timeframe: Option<String>,
}

/// # GET /api/foda-analysis
pub async fn get_analysis(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AnalysisQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    respond(&state, query.aspect.as_deref()).await
}

/// # POST /api/foda-analysis
/// Same report as the GET route, with the filter taken from a JSON body.
pub async fn post_analysis(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    if let Some(timeframe) = &request.timeframe {
        tracing::debug!(%timeframe, "Ignoring requested timeframe.");
    }
    respond(&state, request.aspect.as_deref()).await
}

/// Answers with the failure envelope when the inner service exceeds `limit`.
pub async fn enforce_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => AppError::Timeout(limit).into_response(),
    }
}

async fn respond(state: &AppState, aspect: Option<&str>) -> Result<Response, AppError> {
    let category = parse_aspect(aspect);
    let report = state.analysis.report().await?;
    let report: StrategicReport = match category {
        Some(category) => report.as_ref().clone().filter_by(category),
        None => report.as_ref().clone(),
    };

    let headers = [(header::CACHE_CONTROL, state.cache_control())];
    Ok((headers, Json(ApiResponse::ok(report))).into_response())
}

/// A known quadrant name selects a filter. Anything else, blank included,
/// leaves the report whole.
fn parse_aspect(aspect: Option<&str>) -> Option<Category> {
    let aspect = aspect.map(str::trim).filter(|a| !a.is_empty())?;
    match aspect.parse::<Category>() {
        Ok(category) => Some(category),
        Err(e) => {
            tracing::debug!(%aspect, error = %e, "Unrecognised aspect, serving the full report.");
            None
        }
    }
}
