use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAttendance, DbMeeting, DbUser};

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            email: &'static str,
            display_name: &'static str,
            photo_url: Option<&'static str>,
            role: Option<&'static str>,
            school_year: Option<&'static str>,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_all_users(&self) -> eyre::Result<Vec<DbUser>>;

        pub async fn get_user_by_id_number(
            &self,
            id_number: &'static str,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub MeetingRepo {
        pub async fn create_meeting(
            &self,
            title: &'static str,
            date: NaiveDate,
            time: Option<NaiveTime>,
            location: &'static str,
        ) -> eyre::Result<DbMeeting>;

        pub async fn get_meetings(&self) -> eyre::Result<Vec<DbMeeting>>;

        pub async fn get_meeting_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbMeeting>>;

        pub async fn delete_meeting(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub AttendanceRepo {
        pub async fn mark_attendance(
            &self,
            meeting_id: Uuid,
            user_id: Uuid,
            recorded_name: &'static str,
            status: &'static str,
            marked_by: Option<Uuid>,
        ) -> eyre::Result<DbAttendance>;

        pub async fn get_attendance_for_meeting(
            &self,
            meeting_id: Uuid,
        ) -> eyre::Result<Vec<DbAttendance>>;

        pub async fn get_attendance_for_user(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<DbAttendance>>;

        pub async fn count_present_for_meeting(
            &self,
            meeting_id: Uuid,
        ) -> eyre::Result<i64>;
    }
}
