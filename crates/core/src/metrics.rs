//! Attendance metrics derived from meeting and attendance snapshots.
//!
//! Rate and streak only ever look at *past* meetings — a meeting that has
//! not started yet can neither raise nor lower anyone's numbers. All
//! functions take `now` explicitly and perform no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::attendance::{AttendanceRecord, RecordedStatus};
use crate::models::meeting::Meeting;
use crate::models::report::{ActivityItem, LeaderboardEntry, OfficerStat, RecentMeeting};

/// A badge milestone. Thresholds are cumulative lifetime present counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeTier {
    pub name: &'static str,
    pub threshold: u32,
    pub description: &'static str,
}

/// Ascending milestone table. The names are display labels, nothing more.
pub const BADGE_TIERS: [BadgeTier; 6] = [
    BadgeTier { name: "First Check-in", threshold: 1, description: "Attended your first event" },
    BadgeTier { name: "On Fire", threshold: 3, description: "3 events attended" },
    BadgeTier { name: "Ironclad", threshold: 5, description: "5 events attended" },
    BadgeTier { name: "Perfect Week", threshold: 7, description: "7 events attended" },
    BadgeTier { name: "Lightning", threshold: 10, description: "10 events attended" },
    BadgeTier { name: "Legend", threshold: 20, description: "20 events attended" },
];

/// One badge tier with its earned flag, for the badge grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStanding {
    pub name: String,
    pub threshold: u32,
    pub description: String,
    pub earned: bool,
}

fn is_present(records: &[AttendanceRecord], meeting_id: Uuid) -> bool {
    records
        .iter()
        .any(|r| r.meeting_id == meeting_id && r.status == RecordedStatus::Present)
}

fn past_meetings(meetings: &[Meeting], now: DateTime<Utc>) -> Vec<&Meeting> {
    meetings.iter().filter(|m| m.is_past(now)).collect()
}

/// Lifetime count of meetings with a present record.
pub fn present_count(records: &[AttendanceRecord]) -> u32 {
    records
        .iter()
        .filter(|r| r.status == RecordedStatus::Present)
        .count() as u32
}

/// Percentage of past meetings attended, rounded, 0-100.
///
/// Defined as 0 when no meetings have happened yet — showing 100% before
/// the first meeting would be misleading, and this avoids the division
/// by zero.
pub fn attendance_rate(
    meetings: &[Meeting],
    records: &[AttendanceRecord],
    now: DateTime<Utc>,
) -> u8 {
    let past = past_meetings(meetings, now);
    if past.is_empty() {
        return 0;
    }

    let present = past
        .iter()
        .filter(|m| is_present(records, m.id))
        .count();

    ((present as f64 / past.len() as f64) * 100.0).round() as u8
}

/// Count of consecutive most-recent past meetings attended.
///
/// Walks past meetings newest first and stops at the first one without a
/// present record, so missing the latest meeting resets the streak to 0
/// no matter how long the prior run was.
pub fn current_streak(
    meetings: &[Meeting],
    records: &[AttendanceRecord],
    now: DateTime<Utc>,
) -> u32 {
    let mut past = past_meetings(meetings, now);
    past.sort_by(|a, b| b.starts_at().cmp(&a.starts_at()));

    let mut streak = 0;
    for meeting in past {
        if is_present(records, meeting.id) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Past meetings without a present record.
pub fn missed_count(
    meetings: &[Meeting],
    records: &[AttendanceRecord],
    now: DateTime<Utc>,
) -> u32 {
    past_meetings(meetings, now)
        .iter()
        .filter(|m| !is_present(records, m.id))
        .count() as u32
}

/// The highest tier whose threshold the present count has reached, or
/// `None` below the lowest threshold. Monotonic in the count.
pub fn current_badge(present: u32) -> Option<&'static BadgeTier> {
    BADGE_TIERS.iter().rev().find(|tier| present >= tier.threshold)
}

/// Every tier with its earned flag, in ascending threshold order.
pub fn badge_progress(present: u32) -> Vec<BadgeStanding> {
    BADGE_TIERS
        .iter()
        .map(|tier| BadgeStanding {
            name: tier.name.to_string(),
            threshold: tier.threshold,
            description: tier.description.to_string(),
            earned: present >= tier.threshold,
        })
        .collect()
}

/// Ranks officers by lifetime present count, descending, keeping the top
/// `top` entries. Rank is 1-based list position.
pub fn rank_officers(mut counts: Vec<(Uuid, String, u32)>, top: usize) -> Vec<LeaderboardEntry> {
    counts.sort_by(|a, b| b.2.cmp(&a.2));
    counts
        .into_iter()
        .take(top)
        .enumerate()
        .map(|(index, (user_id, display_name, count))| LeaderboardEntry {
            user_id,
            display_name,
            count,
            rank: (index + 1) as u32,
        })
        .collect()
}

/// Sorts report rows by rate, best first.
pub fn sort_stats(mut stats: Vec<OfficerStat>) -> Vec<OfficerStat> {
    stats.sort_by(|a, b| b.rate.cmp(&a.rate));
    stats
}

/// Mean of the per-officer rates, rounded; 0 with no officers.
pub fn average_rate(stats: &[OfficerStat]) -> u8 {
    if stats.is_empty() {
        return 0;
    }
    let sum: u32 = stats.iter().map(|s| s.rate as u32).sum();
    (sum as f64 / stats.len() as f64).round() as u8
}

/// The most recent `limit` meetings, newest first, each tagged with the
/// account's recorded status (`None` while unrecorded).
pub fn recent_meetings(
    meetings: &[Meeting],
    records: &[AttendanceRecord],
    limit: usize,
) -> Vec<RecentMeeting> {
    let mut sorted: Vec<&Meeting> = meetings.iter().collect();
    sorted.sort_by(|a, b| b.starts_at().cmp(&a.starts_at()));

    sorted
        .into_iter()
        .take(limit)
        .map(|meeting| RecentMeeting {
            meeting_id: meeting.id,
            title: meeting.title.clone(),
            date: meeting.date,
            status: records
                .iter()
                .find(|r| r.meeting_id == meeting.id)
                .map(|r| r.status),
        })
        .collect()
}

/// The account's check-ins joined to their meetings, newest first, top
/// `limit`. A record whose meeting has since been deleted still shows,
/// with a placeholder title.
pub fn recent_activity(
    meetings: &[Meeting],
    records: &[AttendanceRecord],
    limit: usize,
) -> Vec<ActivityItem> {
    let mut items: Vec<(DateTime<Utc>, ActivityItem)> = records
        .iter()
        .filter(|r| r.status == RecordedStatus::Present)
        .map(|record| {
            let meeting = meetings.iter().find(|m| m.id == record.meeting_id);
            let sort_key = meeting
                .map(|m| m.starts_at())
                .or(record.marked_at)
                .unwrap_or(DateTime::UNIX_EPOCH);
            (
                sort_key,
                ActivityItem {
                    meeting_id: record.meeting_id,
                    title: meeting
                        .map(|m| m.title.clone())
                        .unwrap_or_else(|| "Unknown event".to_string()),
                    date: meeting.map(|m| m.date),
                    time: meeting.and_then(|m| m.time),
                },
            )
        })
        .collect();

    items.sort_by(|a, b| b.0.cmp(&a.0));
    items.into_iter().take(limit).map(|(_, item)| item).collect()
}

/// The earliest meeting starting after `now`, with whole seconds until it
/// starts.
pub fn next_meeting(meetings: &[Meeting], now: DateTime<Utc>) -> Option<(Meeting, i64)> {
    meetings
        .iter()
        .filter(|m| m.starts_at() > now)
        .min_by_key(|m| m.starts_at())
        .map(|m| (m.clone(), (m.starts_at() - now).num_seconds()))
}
