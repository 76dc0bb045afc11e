//! Roster reconciliation.
//!
//! Merges the fixed officer roster with the current snapshot of accounts
//! and one meeting's attendance records, producing one row per roster
//! entry with a derived status. Recomputed from scratch on every request;
//! there is no hidden state, so the same inputs always produce the same
//! rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::attendance::{AttendanceRecord, RecordedStatus};
use crate::models::user::UserProfile;
use crate::names::names_match;
use crate::roster::RosterEntry;

/// Derived per-meeting status of a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    /// Registered, but no attendance record yet for this meeting.
    AwaitingCheckin,
    /// No account matched this roster entry.
    Unregistered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedRosterRow {
    pub entry: RosterEntry,
    pub matched_account: Option<UserProfile>,
    pub status: AttendanceStatus,
    pub marked_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub present: u32,
    pub absent: u32,
    pub rate: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRosterResponse {
    pub rows: Vec<MergedRosterRow>,
    pub summary: RosterSummary,
}

/// Produces one [`MergedRosterRow`] per roster entry, in roster order.
///
/// Each entry resolves to at most one account; the first match in
/// account-list order wins. The meeting's attendance record is located by
/// the resolved account id, or, when no account resolved, by
/// case-insensitive equality against the recorded name — a hand-recorded
/// check-in for an unregistered officer still surfaces its timestamp.
///
/// Status precedence: no account → `Unregistered`; account but no record
/// → `AwaitingCheckin`; otherwise the record's own status. Absent or
/// missing data is never an error.
pub fn reconcile_roster(
    roster: &[RosterEntry],
    accounts: &[UserProfile],
    records: &[AttendanceRecord],
) -> Vec<MergedRosterRow> {
    roster
        .iter()
        .map(|entry| {
            let matched = accounts
                .iter()
                .find(|account| names_match(&entry.name, &account.display_name));

            let record = match matched {
                Some(account) => records.iter().find(|r| r.user_id == account.id),
                None => records
                    .iter()
                    .find(|r| r.recorded_name.to_lowercase() == entry.name.to_lowercase()),
            };

            let status = match (matched, record) {
                (None, _) => AttendanceStatus::Unregistered,
                (Some(_), None) => AttendanceStatus::AwaitingCheckin,
                (Some(_), Some(r)) => match r.status {
                    RecordedStatus::Present => AttendanceStatus::Present,
                    RecordedStatus::Absent => AttendanceStatus::Absent,
                },
            };

            MergedRosterRow {
                entry: entry.clone(),
                matched_account: matched.cloned(),
                status,
                marked_at: record.and_then(|r| r.marked_at),
            }
        })
        .collect()
}

/// Present/absent counts and rate for one meeting's merged roster.
///
/// Everyone not present counts as absent here, matching the meeting
/// detail view; the rate is 0 for an empty roster.
pub fn summarize(rows: &[MergedRosterRow]) -> RosterSummary {
    let present = rows
        .iter()
        .filter(|row| row.status == AttendanceStatus::Present)
        .count();
    let total = rows.len();

    let rate = if total == 0 {
        0
    } else {
        ((present as f64 / total as f64) * 100.0).round() as u8
    };

    RosterSummary {
        present: present as u32,
        absent: (total - present) as u32,
        rate,
    }
}
