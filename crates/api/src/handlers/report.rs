//! # Report Handlers
//!
//! Analytics over the full meeting and attendance history: per-officer
//! rates, the organization-wide summary, the leaderboard, and a CSV
//! export of the per-officer table. Every number here is recomputed from
//! the stores on each request; nothing is cached or persisted.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use checkits_core::{
    errors::CheckItsError,
    metrics,
    models::{
        attendance::AttendanceRecord,
        meeting::Meeting,
        report::{
            LeaderboardResponse, OfficerReportResponse, OfficerStat, ReportSummaryResponse,
        },
        user::{UserProfile, UserRole},
    },
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the leaderboard endpoint.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Maximum number of leaders to return (default: 5)
    pub count: Option<usize>,
}

/// Per-officer rates and lifetime counts, best first, with the three
/// highest and three lowest performers broken out.
#[axum::debug_handler]
pub async fn officer_report(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<OfficerReportResponse>, AppError> {
    let stats = collect_officer_stats(&state).await?;

    let top: Vec<OfficerStat> = stats.iter().take(3).cloned().collect();
    let bottom: Vec<OfficerStat> = stats.iter().rev().take(3).cloned().collect();

    Ok(Json(OfficerReportResponse {
        officers: stats,
        top,
        bottom,
    }))
}

/// The per-officer table as plain CSV.
#[axum::debug_handler]
pub async fn officer_report_csv(
    State(state): State<Arc<ApiState>>,
) -> Result<impl IntoResponse, AppError> {
    let stats = collect_officer_stats(&state).await?;

    let mut lines = vec!["Officer,Attendance Rate,Events Attended".to_string()];
    lines.extend(
        stats
            .iter()
            .map(|stat| format!("{},{}%,{}", stat.name, stat.rate, stat.events)),
    );

    Ok((
        [(header::CONTENT_TYPE, "text/csv")],
        lines.join("\n"),
    ))
}

#[axum::debug_handler]
pub async fn report_summary(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ReportSummaryResponse>, AppError> {
    let meetings = checkits_db::repositories::meeting::get_meetings(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?;

    let stats = collect_officer_stats(&state).await?;

    Ok(Json(ReportSummaryResponse {
        total_meetings: meetings.len() as u32,
        officer_count: stats.len() as u32,
        average_rate: metrics::average_rate(&stats),
    }))
}

/// Officers ranked by lifetime present count, descending.
#[axum::debug_handler]
pub async fn leaderboard(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let count = query.count.unwrap_or(5);
    let officers = officer_accounts(&state).await?;

    let mut counts = Vec::with_capacity(officers.len());
    for officer in officers {
        let records: Vec<AttendanceRecord> =
            checkits_db::repositories::attendance::get_attendance_for_user(
                &state.db_pool,
                officer.id,
            )
            .await
            .map_err(CheckItsError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

        counts.push((
            officer.id,
            officer.display_name,
            metrics::present_count(&records),
        ));
    }

    Ok(Json(LeaderboardResponse {
        leaders: metrics::rank_officers(counts, count),
    }))
}

async fn officer_accounts(state: &ApiState) -> Result<Vec<UserProfile>, AppError> {
    let officers = checkits_db::repositories::user::get_all_users(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?
        .into_iter()
        .map(UserProfile::from)
        .filter(|user| user.role == UserRole::Officer)
        .collect();

    Ok(officers)
}

/// Builds the per-officer stat rows, sorted by rate descending.
async fn collect_officer_stats(state: &ApiState) -> Result<Vec<OfficerStat>, AppError> {
    let meetings: Vec<Meeting> = checkits_db::repositories::meeting::get_meetings(&state.db_pool)
        .await
        .map_err(CheckItsError::Database)?
        .into_iter()
        .map(Into::into)
        .collect();

    let now = Utc::now();
    let officers = officer_accounts(state).await?;

    let mut stats = Vec::with_capacity(officers.len());
    for officer in officers {
        let records: Vec<AttendanceRecord> =
            checkits_db::repositories::attendance::get_attendance_for_user(
                &state.db_pool,
                officer.id,
            )
            .await
            .map_err(CheckItsError::Database)?
            .into_iter()
            .map(Into::into)
            .collect();

        stats.push(OfficerStat {
            name: officer.display_name,
            rate: metrics::attendance_rate(&meetings, &records, now),
            events: metrics::present_count(&records),
        });
    }

    Ok(metrics::sort_stats(stats))
}
