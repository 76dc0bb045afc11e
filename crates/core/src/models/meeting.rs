use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub room: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<Uuid>,
    pub school_year: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    /// The instant the meeting starts. A meeting without a clock time is
    /// treated as starting at midnight on its date.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date
            .and_time(self.time.unwrap_or(NaiveTime::MIN))
            .and_utc()
    }

    /// Whether the meeting started strictly before `now`.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.starts_at() < now
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub room: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<Uuid>,
    pub school_year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMeetingRequest {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub room: Option<String>,
    pub description: Option<String>,
    pub school_year: Option<String>,
}

/// A meeting row on the admin dashboard, carrying its present count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingListEntry {
    pub meeting: Meeting,
    pub present_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMeetingsResponse {
    pub meetings: Vec<MeetingListEntry>,
}

/// The next upcoming meeting, if any, for the countdown widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextMeetingResponse {
    pub meeting: Option<Meeting>,
    pub starts_in_seconds: Option<i64>,
}
