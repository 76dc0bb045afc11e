use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use checkits_core::models::attendance::{AttendanceRecord, RecordedStatus};
use checkits_core::models::meeting::Meeting;
use checkits_core::models::user::{UserProfile, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub id_number: Option<String>,
    pub position: Option<String>,
    pub role: String,
    pub school_year: String,
    pub is_profile_complete: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for UserProfile {
    fn from(user: DbUser) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            photo_url: user.photo_url,
            id_number: user.id_number,
            position: user.position,
            role: match user.role.as_str() {
                "admin" => UserRole::Admin,
                _ => UserRole::Officer,
            },
            school_year: user.school_year,
            is_profile_complete: user.is_profile_complete,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMeeting {
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

impl From<DbMeeting> for Meeting {
    fn from(meeting: DbMeeting) -> Self {
        Meeting {
            id: meeting.id,
            title: meeting.title,
            date: meeting.date,
            time: meeting.time,
            location: meeting.location,
            room: meeting.room,
            description: meeting.description,
            created_by: meeting.created_by,
            school_year: meeting.school_year,
            created_at: meeting.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendance {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    pub recorded_name: String,
    pub status: String,
    pub marked_at: Option<DateTime<Utc>>,
    pub marked_by: Option<Uuid>,
}

impl From<DbAttendance> for AttendanceRecord {
    fn from(record: DbAttendance) -> Self {
        AttendanceRecord {
            id: record.id,
            meeting_id: record.meeting_id,
            user_id: record.user_id,
            recorded_name: record.recorded_name,
            status: match record.status.as_str() {
                "present" => RecordedStatus::Present,
                _ => RecordedStatus::Absent,
            },
            marked_at: record.marked_at,
            marked_by: record.marked_by,
        }
    }
}
