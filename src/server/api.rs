//! REST API handlers for the catalog server
//!
//! This module defines the API routes and handlers. Handlers check input
//! shape, call a query service and translate the outcome into a status code;
//! they hold no business logic of their own.

use std::any::Any;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Error, Result};
use crate::models::{Coach, TrainingProgram};

use super::http::AppState;

/// Message returned for every unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request";

// ============================================================================
// API Response Types
// ============================================================================

/// Simple error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Service metadata served at the root
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Query string for the price-range listing
#[derive(Debug, Deserialize)]
pub struct PriceRangeParams {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

// ============================================================================
// API Errors
// ============================================================================

/// Errors surfaced by handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup by id found nothing
    #[error("{0}")]
    NotFound(String),

    /// Input rejected before any query ran
    #[error("{0}")]
    BadRequest(String),

    /// Anything else; details are logged, never returned
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { entity, id } => {
                Self::NotFound(format!("{entity} with ID {id} not found"))
            }
            Error::InvalidArgument(msg) => Self::BadRequest(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::NotFound(msg) => {
                tracing::warn!("{}", msg);
                msg
            }
            Self::BadRequest(msg) => {
                tracing::warn!(reason = %msg, "Rejected request");
                msg
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Error occurred while processing request");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Response for a handler that panicked
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(detail).into_response()
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// Single path segment, with the rejection kept so it renders as JSON
type Segment = std::result::Result<Path<String>, PathRejection>;

// ============================================================================
// Input Checks
// ============================================================================

const BLANK_SPECIALIZATION: &str = "Specialization cannot be empty";
const BLANK_DIFFICULTY: &str = "Difficulty level cannot be empty";
const BLANK_GOAL: &str = "Goal cannot be empty";
const INVALID_COACH_ID: &str = "Coach ID must be greater than 0";

/// Unwrap a single path segment, rejecting undecodable input as a bad request
fn segment(param: Segment) -> Result<String> {
    param
        .map(|Path(value)| value)
        .map_err(|e| Error::invalid_argument(e.body_text()))
}

fn parse_id(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| Error::invalid_argument(format!("'{raw}' is not a valid ID")))
}

fn require_text<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(message));
    }
    Ok(value)
}

fn parse_coach_id(raw: &str) -> Result<i32> {
    let coach_id = parse_id(raw)?;
    if coach_id <= 0 {
        return Err(Error::invalid_argument(INVALID_COACH_ID));
    }
    Ok(coach_id)
}

fn price_bounds(params: PriceRangeParams) -> Result<(f64, f64)> {
    let (Some(min), Some(max)) = (params.min, params.max) else {
        return Err(Error::invalid_argument(
            "Both min and max price are required",
        ));
    };

    if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 {
        return Err(Error::invalid_argument(
            "Prices must be non-negative numbers",
        ));
    }
    if min > max {
        return Err(Error::invalid_argument(
            "Minimum price cannot exceed maximum price",
        ));
    }
    Ok((min, max))
}

/// Route for a filter whose segment arrived empty (`/coaches/specialization/`)
fn empty_segment(message: &'static str) -> MethodRouter<AppState> {
    get(move || async move { ApiError::from(Error::invalid_argument(message)) })
}

// ============================================================================
// API Routes
// ============================================================================

/// Catalog routes, relative to the API prefix
pub const CATALOG_ROUTES: &[&str] = &[
    "/coaches",
    "/coaches/{id}",
    "/coaches/featured",
    "/coaches/specialization/{specialization}",
    "/coaches/available",
    "/coaches/top-rated",
    "/programs",
    "/programs/{id}",
    "/programs/featured",
    "/programs/difficulty/{difficulty}",
    "/programs/coach/{coach_id}",
    "/programs/goal/{goal}",
    "/programs/price-range",
];

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        // Coach endpoints
        .route("/coaches", get(list_coaches))
        .route("/coaches/featured", get(featured_coaches))
        .route("/coaches/available", get(available_coaches))
        .route("/coaches/top-rated", get(top_rated_coaches))
        .route(
            "/coaches/specialization/{specialization}",
            get(coaches_by_specialization),
        )
        .route("/coaches/specialization/", empty_segment(BLANK_SPECIALIZATION))
        .route("/coaches/{id}", get(get_coach))
        // Program endpoints
        .route("/programs", get(list_programs))
        .route("/programs/featured", get(featured_programs))
        .route("/programs/price-range", get(programs_by_price_range))
        .route("/programs/difficulty/{difficulty}", get(programs_by_difficulty))
        .route("/programs/difficulty/", empty_segment(BLANK_DIFFICULTY))
        .route("/programs/coach/{coach_id}", get(programs_by_coach))
        .route("/programs/coach/", empty_segment(INVALID_COACH_ID))
        .route("/programs/goal/{goal}", get(programs_by_goal))
        .route("/programs/goal/", empty_segment(BLANK_GOAL))
        .route("/programs/{id}", get(get_program));

    let prefix = state.config.api_prefix.clone();
    let catalog = if prefix.is_empty() {
        Router::new().merge(catalog)
    } else {
        Router::new().nest(&prefix, catalog)
    };

    catalog
        // Service endpoints
        .route("/health", get(health_check))
        .route("/", get(service_info))
        .with_state(state)
}

// ============================================================================
// Service Handlers
// ============================================================================

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Root endpoint with service metadata
async fn service_info(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Welcome to the Elite Fitness Coach API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: CATALOG_ROUTES
            .iter()
            .map(|route| state.config.api_path(route))
            .collect(),
    })
}

// ============================================================================
// Coach Handlers
// ============================================================================

async fn list_coaches(State(state): State<AppState>) -> ApiResult<Vec<Coach>> {
    tracing::info!("Fetching all coaches");
    Ok(Json(state.coaches.get_all()))
}

async fn get_coach(State(state): State<AppState>, raw: Segment) -> ApiResult<Coach> {
    let id = parse_id(&segment(raw)?)?;
    tracing::info!(coach_id = id, "Fetching coach");

    state
        .coaches
        .get_by_id(id)
        .map(Json)
        .ok_or_else(|| Error::coach_not_found(id).into())
}

async fn featured_coaches(State(state): State<AppState>) -> ApiResult<Vec<Coach>> {
    tracing::info!("Fetching featured coaches");
    Ok(Json(state.coaches.get_featured()))
}

async fn coaches_by_specialization(
    State(state): State<AppState>,
    specialization: Segment,
) -> ApiResult<Vec<Coach>> {
    let specialization = segment(specialization)?;
    let specialization = require_text(&specialization, BLANK_SPECIALIZATION)?;
    tracing::info!(specialization = %specialization, "Fetching coaches by specialization");

    Ok(Json(state.coaches.get_by_specialization(specialization)))
}

async fn available_coaches(State(state): State<AppState>) -> ApiResult<Vec<Coach>> {
    tracing::info!("Fetching available coaches");
    Ok(Json(state.coaches.get_available()))
}

async fn top_rated_coaches(State(state): State<AppState>) -> ApiResult<Vec<Coach>> {
    tracing::info!("Fetching top-rated coaches");
    Ok(Json(state.coaches.get_top_rated()))
}

// ============================================================================
// Program Handlers
// ============================================================================

async fn list_programs(State(state): State<AppState>) -> ApiResult<Vec<TrainingProgram>> {
    tracing::info!("Fetching all programs");
    Ok(Json(state.programs.get_all()))
}

async fn get_program(
    State(state): State<AppState>,
    raw: Segment,
) -> ApiResult<TrainingProgram> {
    let id = parse_id(&segment(raw)?)?;
    tracing::info!(program_id = id, "Fetching program");

    state
        .programs
        .get_by_id(id)
        .map(Json)
        .ok_or_else(|| Error::program_not_found(id).into())
}

async fn featured_programs(State(state): State<AppState>) -> ApiResult<Vec<TrainingProgram>> {
    tracing::info!("Fetching featured programs");
    Ok(Json(state.programs.get_featured()))
}

async fn programs_by_difficulty(
    State(state): State<AppState>,
    difficulty: Segment,
) -> ApiResult<Vec<TrainingProgram>> {
    let difficulty = segment(difficulty)?;
    let difficulty = require_text(&difficulty, BLANK_DIFFICULTY)?;
    tracing::info!(difficulty = %difficulty, "Fetching programs by difficulty");

    Ok(Json(state.programs.get_by_difficulty(difficulty)))
}

async fn programs_by_coach(
    State(state): State<AppState>,
    raw: Segment,
) -> ApiResult<Vec<TrainingProgram>> {
    let coach_id = parse_coach_id(&segment(raw)?)?;
    tracing::info!(coach_id, "Fetching programs for coach");

    Ok(Json(state.programs.get_by_coach(coach_id)))
}

async fn programs_by_goal(
    State(state): State<AppState>,
    goal: Segment,
) -> ApiResult<Vec<TrainingProgram>> {
    let goal = segment(goal)?;
    let goal = require_text(&goal, BLANK_GOAL)?;
    tracing::info!(goal = %goal, "Fetching programs by goal");

    Ok(Json(state.programs.get_by_goal(goal)))
}

async fn programs_by_price_range(
    State(state): State<AppState>,
    params: std::result::Result<Query<PriceRangeParams>, QueryRejection>,
) -> ApiResult<Vec<TrainingProgram>> {
    let Query(params) = params.map_err(|e| Error::invalid_argument(e.body_text()))?;
    let (min, max) = price_bounds(params)?;
    tracing::info!(min, max, "Fetching programs by price range");

    Ok(Json(state.programs.get_by_price_range(min, max)))
}

// ============================================================================
// Tests
// ============================================================================
