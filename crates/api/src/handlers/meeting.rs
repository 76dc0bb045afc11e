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
        meeting::{
            CreateMeetingRequest, ListMeetingsResponse, Meeting, MeetingListEntry,
            NextMeetingResponse, UpdateMeetingRequest,
        },
        user::{QrPayloadResponse, UserProfile, UserRole},
    },
    qr, reconcile,
    reconcile::GetRosterResponse,
    roster,
};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_meeting(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateMeetingRequest>,
) -> Result<Json<Meeting>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError(CheckItsError::Validation(
            "Meeting title must not be empty".to_string(),
        )));
    }

    let db_meeting = checkits_db::repositories::meeting::create_meeting(
        &state.db_pool,
        &payload.title,
        payload.date,
        payload.time,
        &payload.location,
        payload.room.as_deref(),
        payload.description.as_deref(),
        payload.created_by,
        payload.school_year.as_deref(),
    )
    .await
    .map_err(CheckItsError::Database)?;

    Ok(Json(db_meeting.into()))
}

/// Lists all meetings, newest first, each with its present count as the
/// admin dashboard shows them.
#[axum::debug_handler]
pub async fn list_meetings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListMeetingsResponse>, AppError> {
    let db_meetings = checkits_db::repositories::meeting::get_meetings(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?;

    let mut meetings = Vec::with_capacity(db_meetings.len());
    for db_meeting in db_meetings {
        let present_count = checkits_db::repositories::attendance::count_present_for_meeting(
            &state.db_pool,
            db_meeting.id,
        )
        .await
        .map_err(CheckItsError::Database)?;

        meetings.push(MeetingListEntry {
            meeting: db_meeting.into(),
            present_count: present_count as u32,
        });
    }

    Ok(Json(ListMeetingsResponse { meetings }))
}

/// Returns the next upcoming meeting with seconds until it starts, for
/// the countdown widget. Both fields are null when nothing is scheduled.
#[axum::debug_handler]
pub async fn next_meeting(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<NextMeetingResponse>, AppError> {
    let meetings: Vec<Meeting> = checkits_db::repositories::meeting::get_meetings(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    let response = match metrics::next_meeting(&meetings, Utc::now()) {
        Some((meeting, seconds)) => NextMeetingResponse {
            meeting: Some(meeting),
            starts_in_seconds: Some(seconds),
        },
        None => NextMeetingResponse {
            meeting: None,
            starts_in_seconds: None,
        },
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_meeting(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Meeting>, AppError> {
    let db_meeting = checkits_db::repositories::meeting::get_meeting_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("Meeting with ID {} not found", id)))?;

    Ok(Json(db_meeting.into()))
}

#[axum::debug_handler]
pub async fn update_meeting(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMeetingRequest>,
) -> Result<Json<Meeting>, AppError> {
    checkits_db::repositories::meeting::get_meeting_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("Meeting with ID {} not found", id)))?;

    let db_meeting = checkits_db::repositories::meeting::update_meeting(&state.db_pool, id, &payload)
        .await
        .map_err(CheckItsError::Database)?;

    Ok(Json(db_meeting.into()))
}

#[axum::debug_handler]
pub async fn delete_meeting(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    checkits_db::repositories::meeting::get_meeting_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("Meeting with ID {} not found", id)))?;

    checkits_db::repositories::meeting::delete_meeting(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?;

    Ok(Json(serde_json::json!({ "deleted": id })))
}

/// Reconciles the fixed officer roster against this meeting's attendance.
///
/// Fetches the account and attendance snapshots, then delegates the merge
/// and the present/absent summary to the core.
#[axum::debug_handler]
pub async fn meeting_roster(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetRosterResponse>, AppError> {
    checkits_db::repositories::meeting::get_meeting_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("Meeting with ID {} not found", id)))?;

    let officers: Vec<UserProfile> = checkits_db::repositories::user::get_all_users(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?
        .into_iter()
        .map(UserProfile::from)
        .filter(|user| user.role == UserRole::Officer)
        .collect();

    let records: Vec<AttendanceRecord> =
        checkits_db::repositories::attendance::get_attendance_for_meeting(&state.db_pool, id)
            .await
            .map_err(CheckItsError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

    let entries = roster::officer_roster();
    let rows = reconcile::reconcile_roster(&entries, &officers, &records);
    let summary = reconcile::summarize(&rows);

    Ok(Json(GetRosterResponse { rows, summary }))
}

/// Returns the payload string for this meeting's check-in QR code.
#[axum::debug_handler]
pub async fn meeting_qr(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<QrPayloadResponse>, AppError> {
    checkits_db::repositories::meeting::get_meeting_by_id(&state.db_pool, id)
        .await
        .map_err(CheckItsError::Database)?
        .ok_or_else(|| CheckItsError::NotFound(format!("Meeting with ID {} not found", id)))?;

    Ok(Json(QrPayloadResponse {
        payload: qr::meeting_payload(id),
    }))
}
