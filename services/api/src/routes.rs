//! Exercise API routes

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dates::{parse_date, today},
    error::{ApiError, ApiResult},
    extract::Payload,
    log_filter::LogFilter,
    models::{
        CreateUserRequest, CreateUserResponse, ExerciseResponse, LogEntry, LogQuery, LogResponse,
        NewExerciseRequest, UserSummary,
    },
    state::AppState,
    validation::{parse_duration, require, validate_username},
};

const LANDING_PAGE: &str = include_str!("../static/index.html");

/// Create the router for the exercise API
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health_check))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:id/exercises", post(add_exercise))
        .route("/api/users/:id/logs", get(get_logs))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Static landing page with forms for the API
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database) = match state.store.health_check().await {
        Ok(true) => (StatusCode::OK, "ok"),
        Ok(false) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ok" } else { "degraded" },
            "service": "exercise-api",
            "database": database,
        })),
    )
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserRequest>,
) -> ApiResult<Json<CreateUserResponse>> {
    let username = payload.username.unwrap_or_default();
    validate_username(&username).map_err(ApiError::Validation)?;

    let user = state.store.create_user(&username).await?;
    info!("Created user {}", user.id);

    Ok(Json(CreateUserResponse {
        username: user.username,
        id: user.id,
    }))
}

/// Get all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserSummary>>> {
    let users = state.store.list_users().await?;

    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// Log an exercise for a user
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<NewExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let user_id = parse_user_id(&id)?;

    let description =
        require("description", payload.description.as_deref()).map_err(ApiError::Validation)?;
    let duration = require("duration", payload.duration.as_deref())
        .and_then(parse_duration)
        .map_err(ApiError::Validation)?;
    let date = match payload.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => {
            parse_date(raw).ok_or_else(|| ApiError::Validation(format!("Invalid date: {}", raw)))?
        }
        None => today(),
    };

    let entry = LogEntry {
        description: description.to_string(),
        duration,
        date,
    };

    let user = state
        .store
        .append_exercise(user_id, &entry)
        .await?
        .ok_or_else(ApiError::user_not_found)?;
    info!("Logged exercise for user {}", user.id);

    Ok(Json(ExerciseResponse::new(user, entry)))
}

/// Get a user's exercise log, optionally filtered by date range and count
pub async fn get_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> ApiResult<Json<LogResponse>> {
    let user_id = parse_user_id(&id)?;
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let filter = LogFilter::from_query(&query, today()).map_err(ApiError::Validation)?;

    let user_log = state
        .store
        .find_log(user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(LogResponse::new(
        user_log.user,
        filter.apply(user_log.log),
    )))
}

/// Ids that are not UUIDs cannot name a stored user
fn parse_user_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::user_not_found())
}
