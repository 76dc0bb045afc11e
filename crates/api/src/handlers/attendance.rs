use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use checkits_core::{
    errors::CheckItsError,
    models::attendance::{
        ManualCheckinRequest, MarkAttendanceRequest, MarkAttendanceResponse, ScanRequest,
    },
    qr,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Upserts one attendance record keyed by (meeting, user): marking twice
/// overwrites the status and refreshes the server-assigned timestamp.
#[axum::debug_handler]
pub async fn mark_attendance(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<MarkAttendanceRequest>,
) -> Result<Json<MarkAttendanceResponse>, AppError> {
    let response = record_attendance(
        &state,
        payload.meeting_id,
        payload.user_id,
        payload.status.as_str(),
        payload.marked_by,
    )
    .await?;

    Ok(Json(response))
}

/// Resolves a scanned QR payload against its context and marks the
/// officer present.
///
/// An admin scanning an officer badge supplies `meeting_id`; an officer
/// scanning a meeting code supplies `user_id` and is recorded as having
/// marked themselves.
#[axum::debug_handler]
pub async fn scan(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<MarkAttendanceResponse>, AppError> {
    let (meeting_id, user_id, marked_by) = match (payload.meeting_id, payload.user_id) {
        (Some(meeting_id), None) => {
            let officer_id = qr::parse_officer(&payload.payload).ok_or_else(|| {
                CheckItsError::Validation("Unknown officer QR code".to_string())
            })?;
            (meeting_id, officer_id, payload.marked_by)
        }
        (None, Some(user_id)) => {
            let meeting_id = qr::parse_meeting_checkin(&payload.payload).ok_or_else(|| {
                CheckItsError::Validation("Unknown meeting QR code".to_string())
            })?;
            (meeting_id, user_id, payload.marked_by.or(Some(user_id)))
        }
        _ => {
            return Err(AppError(CheckItsError::Validation(
                "Provide exactly one of meeting_id or user_id as scan context".to_string(),
            )))
        }
    };

    let response = record_attendance(&state, meeting_id, user_id, "present", marked_by).await?;

    Ok(Json(response))
}

/// Marks an officer present by school ID number, for check-ins without a
/// scannable badge.
#[axum::debug_handler]
pub async fn manual_checkin(
    State(state): State<Arc<ApiState>>,
    Path(meeting_id): Path<Uuid>,
    Json(payload): Json<ManualCheckinRequest>,
) -> Result<Json<MarkAttendanceResponse>, AppError> {
    let officer =
        checkits_db::repositories::user::get_user_by_id_number(&state.db_pool, &payload.id_number)
            .await
            .map_err(CheckItsError::Database)?
            .ok_or_else(|| {
                CheckItsError::NotFound(format!(
                    "Officer with ID number {} not found",
                    payload.id_number
                ))
            })?;

    let response =
        record_attendance(&state, meeting_id, officer.id, "present", payload.marked_by).await?;

    Ok(Json(response))
}

/// Validates both sides of the (meeting, user) key, then performs the
/// upsert with the user's current display name as the recorded name.
async fn record_attendance(
    state: &ApiState,
    meeting_id: Uuid,
    user_id: Uuid,
    status: &str,
    marked_by: Option<Uuid>,
) -> Result<MarkAttendanceResponse, AppError> {
    checkits_db::repositories::meeting::get_meeting_by_id(&state.db_pool, meeting_id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| {
            CheckItsError::NotFound(format!("Meeting with ID {} not found", meeting_id))
        })?;

    let user = checkits_db::repositories::user::get_user_by_id(&state.db_pool, user_id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("User with ID {} not found", user_id)))?;

    let record = checkits_db::repositories::attendance::mark_attendance(
        &state.db_pool,
        meeting_id,
        user_id,
        &user.display_name,
        status,
        marked_by,
    )
    .await
    .map_err(CheckItsError::Database)?;

    let record: checkits_core::models::attendance::AttendanceRecord = record.into();

    Ok(MarkAttendanceResponse {
        meeting_id: record.meeting_id,
        user_id: record.user_id,
        display_name: user.display_name,
        status: record.status,
        marked_at: record.marked_at,
    })
}
