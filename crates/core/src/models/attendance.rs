use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status stored on a persisted attendance record. A missing record means
/// "no attendance information yet", which is distinct from an explicit
/// `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordedStatus {
    Present,
    Absent,
}

impl RecordedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordedStatus::Present => "present",
            RecordedStatus::Absent => "absent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    /// Display name as it was recorded at check-in time.
    pub recorded_name: String,
    pub status: RecordedStatus,
    pub marked_at: Option<DateTime<Utc>>,
    pub marked_by: Option<Uuid>,
}

/// Explicit upsert of one attendance record, keyed by (meeting, user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    pub status: RecordedStatus,
    pub marked_by: Option<Uuid>,
}

/// A scanned QR payload plus the context it was scanned in.
///
/// An admin scanning an officer badge supplies `meeting_id`; an officer
/// scanning a meeting code supplies `user_id`. Exactly one of the two is
/// expected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub payload: String,
    pub meeting_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub marked_by: Option<Uuid>,
}

/// Manual check-in by school ID number, for officers without a scannable
/// badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualCheckinRequest {
    pub id_number: String,
    pub marked_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceResponse {
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    pub display_name: String,
    pub status: RecordedStatus,
    pub marked_at: Option<DateTime<Utc>>,
}
