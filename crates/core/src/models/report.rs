use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::BadgeStanding;
use crate::models::attendance::RecordedStatus;

/// One officer's row in the analytics report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficerStat {
    pub name: String,
    /// Lifetime attendance rate over past meetings, 0-100.
    pub rate: u8,
    /// Lifetime count of meetings attended.
    pub events: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerReportResponse {
    pub officers: Vec<OfficerStat>,
    pub top: Vec<OfficerStat>,
    pub bottom: Vec<OfficerStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummaryResponse {
    pub total_meetings: u32,
    pub officer_count: u32,
    pub average_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub display_name: String,
    pub count: u32,
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub leaders: Vec<LeaderboardEntry>,
}

/// A meeting on the officer dashboard's recent list. `status` is `None`
/// while no attendance has been recorded (shown as "Pending").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentMeeting {
    pub meeting_id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub status: Option<RecordedStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub attendance_rate: u8,
    pub streak: u32,
    pub missed: u32,
    pub present_count: u32,
    pub current_badge: Option<String>,
    pub badges: Vec<BadgeStanding>,
    pub recent: Vec<RecentMeeting>,
}

/// One check-in on the recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub meeting_id: Uuid,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFeedResponse {
    pub items: Vec<ActivityItem>,
}
