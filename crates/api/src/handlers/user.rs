use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use checkits_core::{
    errors::CheckItsError,
    metrics,
    models::{
        attendance::AttendanceRecord,
        meeting::Meeting,
        report::{ActivityFeedResponse, DashboardResponse},
        user::{
            CreateUserRequest, ListUsersResponse, QrPayloadResponse, UpdateUserRequest,
            UserProfile,
        },
    },
    qr,
};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserProfile>, AppError> {
    if payload.display_name.trim().is_empty() {
        return Err(AppError(CheckItsError::Validation(
            "Display name must not be empty".to_string(),
        )));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError(CheckItsError::Validation(
            "Email must not be empty".to_string(),
        )));
    }

    let db_user = checkits_db::repositories::user::create_user(
        &state.db_pool,
        &payload.email,
        &payload.display_name,
        payload.photo_url.as_deref(),
        payload.role.map(|role| role.as_str()),
        payload.school_year.as_deref(),
    )
    .await
    .map_err(CheckItsError::Database)?;

    Ok(Json(db_user.into()))
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListUsersResponse>, AppError> {
    let users = checkits_db::repositories::user::get_all_users(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?;

    Ok(Json(ListUsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfile>, AppError> {
    let db_user = checkits_db::repositories::user::get_user_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("User with ID {} not found", id)))?;

    Ok(Json(db_user.into()))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>, AppError> {
    // Check the user exists so a bad id maps to 404 rather than 500
    checkits_db::repositories::user::get_user_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("User with ID {} not found", id)))?;

    let db_user = checkits_db::repositories::user::update_user(&state.db_pool, id, &payload)
        .await
        .map_err(CheckItsError::Database)?;

    Ok(Json(db_user.into()))
}

#[axum::debug_handler]
pub async fn get_user_by_id_number(
    State(state): State<Arc<ApiState>>,
    Path(id_number): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let db_user =
        checkits_db::repositories::user::get_user_by_id_number(&state.db_pool, &id_number)
            .await
            .map_err(CheckItsError::Database)?
            .ok_or_else(|| {
                CheckItsError::NotFound(format!("User with ID number {} not found", id_number))
            })?;

    Ok(Json(db_user.into()))
}

/// Returns the payload string for an officer's personal QR badge.
#[axum::debug_handler]
pub async fn user_qr(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<QrPayloadResponse>, AppError> {
    checkits_db::repositories::user::get_user_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("User with ID {} not found", id)))?;

    Ok(Json(QrPayloadResponse {
        payload: qr::officer_payload(id),
    }))
}

/// Assembles the officer dashboard: rate, streak, missed count, badge
/// standings, and the most recent meetings tagged with this account's
/// status.
#[axum::debug_handler]
pub async fn user_dashboard(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    checkits_db::repositories::user::get_user_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("User with ID {} not found", id)))?;

    let meetings: Vec<Meeting> = checkits_db::repositories::meeting::get_meetings(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    let records: Vec<AttendanceRecord> =
        checkits_db::repositories::attendance::get_attendance_for_user(&state.db_pool, id)
            .await
            .map_err(CheckItsError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

    let now = Utc::now();
    let present = metrics::present_count(&records);

    Ok(Json(DashboardResponse {
        attendance_rate: metrics::attendance_rate(&meetings, &records, now),
        streak: metrics::current_streak(&meetings, &records, now),
        missed: metrics::missed_count(&meetings, &records, now),
        present_count: present,
        current_badge: metrics::current_badge(present).map(|tier| tier.name.to_string()),
        badges: metrics::badge_progress(present),
        recent: metrics::recent_meetings(&meetings, &records, 10),
    }))
}

/// Returns the account's recent check-ins joined to their meetings.
#[axum::debug_handler]
pub async fn user_activity(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActivityFeedResponse>, AppError> {
    checkits_db::repositories::user::get_user_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("User with ID {} not found", id)))?;

    let meetings: Vec<Meeting> = checkits_db::repositories::meeting::get_meetings(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    let records: Vec<AttendanceRecord> =
        checkits_db::repositories::attendance::get_attendance_for_user(&state.db_pool, id)
            .await
            .map_err(CheckItsError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

    Ok(Json(ActivityFeedResponse {
        items: metrics::recent_activity(&meetings, &records, 5),
    }))
}
