use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use checkits_core::{
    metrics,
    models::{attendance::AttendanceRecord, meeting::Meeting, report::OfficerStat},
};
use checkits_db::mock::repositories::{MockAttendanceRepo, MockMeetingRepo};
use checkits_db::models::{DbAttendance, DbMeeting, DbUser};

fn eval_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

fn db_meeting(day: u32) -> DbMeeting {
    DbMeeting {
        id: Uuid::new_v4(),
        title: "General Assembly".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
        time: None,
        location: "AVR 2".to_string(),
        room: None,
        description: None,
        created_by: None,
        school_year: Some("2025-2026".to_string()),
        created_at: eval_time(),
    }
}

fn db_officer(display_name: &str) -> DbUser {
    DbUser {
        id: Uuid::new_v4(),
        email: "officer@example.com".to_string(),
        display_name: display_name.to_string(),
        photo_url: None,
        id_number: None,
        position: None,
        role: "officer".to_string(),
        school_year: "2025-2026".to_string(),
        is_profile_complete: true,
        created_at: eval_time(),
    }
}

fn db_present(meeting_id: Uuid, user_id: Uuid) -> DbAttendance {
    DbAttendance {
        id: Uuid::new_v4(),
        meeting_id,
        user_id,
        recorded_name: "recorded".to_string(),
        status: "present".to_string(),
        marked_at: Some(eval_time()),
        marked_by: None,
    }
}

// Test wrapper mirroring the report handler: fetch snapshots through the
// repository mocks, derive everything through the core.
async fn collect_stats_wrapper(
    meeting_repo: &MockMeetingRepo,
    attendance_repo: &MockAttendanceRepo,
    officers: &[DbUser],
) -> Vec<OfficerStat> {
    let meetings: Vec<Meeting> = meeting_repo
        .get_meetings()
        .await
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect();

    let mut stats = Vec::new();
    for officer in officers {
        let records: Vec<AttendanceRecord> = attendance_repo
            .get_attendance_for_user(officer.id)
            .await
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect();

        stats.push(OfficerStat {
            name: officer.display_name.clone(),
            rate: metrics::attendance_rate(&meetings, &records, eval_time()),
            events: metrics::present_count(&records),
        });
    }

    metrics::sort_stats(stats)
}

#[tokio::test]
async fn test_officer_stats_are_sorted_best_first() {
    let meetings = vec![db_meeting(5), db_meeting(12)];
    let regular = db_officer("Catherine Arnado");
    let diligent = db_officer("Kyle Andrei Abellera");
    let diligent_id = diligent.id;

    let mut meeting_repo = MockMeetingRepo::new();
    let meetings_clone = meetings.clone();
    meeting_repo
        .expect_get_meetings()
        .returning(move || Ok(meetings_clone.clone()));

    let regular_records = vec![db_present(meetings[0].id, regular.id)];
    let diligent_records = vec![
        db_present(meetings[0].id, diligent.id),
        db_present(meetings[1].id, diligent.id),
    ];

    let mut attendance_repo = MockAttendanceRepo::new();
    attendance_repo
        .expect_get_attendance_for_user()
        .returning(move |user_id| {
            if user_id == diligent_id {
                Ok(diligent_records.clone())
            } else {
                Ok(regular_records.clone())
            }
        });

    let stats =
        collect_stats_wrapper(&meeting_repo, &attendance_repo, &[regular, diligent]).await;

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].name, "Kyle Andrei Abellera");
    assert_eq!(stats[0].rate, 100);
    assert_eq!(stats[0].events, 2);
    assert_eq!(stats[1].name, "Catherine Arnado");
    assert_eq!(stats[1].rate, 50);
}

#[tokio::test]
async fn test_stats_with_no_meetings_are_all_zero() {
    let mut meeting_repo = MockMeetingRepo::new();
    meeting_repo.expect_get_meetings().returning(|| Ok(vec![]));

    let mut attendance_repo = MockAttendanceRepo::new();
    attendance_repo
        .expect_get_attendance_for_user()
        .returning(|_| Ok(vec![]));

    let officers = vec![db_officer("Catherine Arnado")];
    let stats = collect_stats_wrapper(&meeting_repo, &attendance_repo, &officers).await;

    assert_eq!(stats[0].rate, 0);
    assert_eq!(stats[0].events, 0);
    assert_eq!(metrics::average_rate(&stats), 0);
}

#[tokio::test]
async fn test_global_average_over_collected_stats() {
    let stats = vec![
        OfficerStat { name: "High".to_string(), rate: 100, events: 4 },
        OfficerStat { name: "Low".to_string(), rate: 0, events: 0 },
    ];

    assert_eq!(metrics::average_rate(&stats), 50);
}

#[tokio::test]
async fn test_leaderboard_ranks_by_lifetime_present_count() {
    let a = db_officer("Catherine Arnado");
    let b = db_officer("Rhonan Madarang");

    let counts = vec![
        (a.id, a.display_name.clone(), 3),
        (b.id, b.display_name.clone(), 8),
    ];

    let leaders = metrics::rank_officers(counts, 5);

    assert_eq!(leaders[0].display_name, "Rhonan Madarang");
    assert_eq!(leaders[0].rank, 1);
    assert_eq!(leaders[1].display_name, "Catherine Arnado");
    assert_eq!(leaders[1].rank, 2);
}

#[tokio::test]
async fn test_csv_rows_match_report_format() {
    let stats = vec![OfficerStat {
        name: "Catherine Arnado".to_string(),
        rate: 75,
        events: 3,
    }];

    let mut lines = vec!["Officer,Attendance Rate,Events Attended".to_string()];
    lines.extend(
        stats
            .iter()
            .map(|stat| format!("{},{}%,{}", stat.name, stat.rate, stat.events)),
    );

    assert_eq!(
        lines.join("\n"),
        "Officer,Attendance Rate,Events Attended\nCatherine Arnado,75%,3"
    );
}
