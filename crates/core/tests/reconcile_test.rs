use chrono::Utc;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use checkits_core::models::attendance::{AttendanceRecord, RecordedStatus};
use checkits_core::models::user::{UserProfile, UserRole};
use checkits_core::reconcile::{reconcile_roster, summarize, AttendanceStatus};
use checkits_core::roster::{officer_roster, RosterEntry, RosterGroup};

fn entry(name: &str) -> RosterEntry {
    RosterEntry {
        name: name.to_string(),
        position: "Committee - Creatives".to_string(),
        group: RosterGroup::Creative,
    }
}

fn account(id: Uuid, display_name: &str) -> UserProfile {
    UserProfile {
        id,
        email: format!("{}@example.com", id.simple()),
        display_name: display_name.to_string(),
        photo_url: None,
        id_number: None,
        position: None,
        role: UserRole::Officer,
        school_year: "2025-2026".to_string(),
        is_profile_complete: true,
        created_at: Utc::now(),
    }
}

fn record(meeting_id: Uuid, user_id: Uuid, status: RecordedStatus) -> AttendanceRecord {
    AttendanceRecord {
        id: Uuid::new_v4(),
        meeting_id,
        user_id,
        recorded_name: "recorded".to_string(),
        status,
        marked_at: Some(Utc::now()),
        marked_by: None,
    }
}

#[test]
fn test_empty_account_set_yields_unregistered_for_every_row() {
    let roster = officer_roster();
    let rows = reconcile_roster(&roster, &[], &[]);

    assert_eq!(rows.len(), roster.len());
    for row in &rows {
        assert_eq!(row.status, AttendanceStatus::Unregistered);
        assert!(row.matched_account.is_none());
    }
}

#[test]
fn test_matched_accounts_without_records_await_checkin() {
    let roster = vec![entry("Ana Borja"), entry("Carl Dizon")];
    let accounts = vec![
        account(Uuid::new_v4(), "Ana Borja"),
        account(Uuid::new_v4(), "Carl Dizon"),
    ];

    let rows = reconcile_roster(&roster, &accounts, &[]);

    for row in &rows {
        assert_eq!(row.status, AttendanceStatus::AwaitingCheckin);
        assert!(row.matched_account.is_some());
    }
}

#[test]
fn test_present_record_drives_status() {
    let meeting_id = Uuid::new_v4();
    let account_id = Uuid::new_v4();
    let roster = vec![entry("Ana Borja")];
    let accounts = vec![account(account_id, "Ana Borja")];
    let records = vec![record(meeting_id, account_id, RecordedStatus::Present)];

    let rows = reconcile_roster(&roster, &accounts, &records);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Present);
    assert_eq!(rows[0].matched_account.as_ref().unwrap().id, account_id);
    assert!(rows[0].marked_at.is_some());
}

#[test]
fn test_absent_record_drives_status() {
    let meeting_id = Uuid::new_v4();
    let account_id = Uuid::new_v4();
    let roster = vec![entry("Ana Borja")];
    let accounts = vec![account(account_id, "Ana Borja")];
    let records = vec![record(meeting_id, account_id, RecordedStatus::Absent)];

    let rows = reconcile_roster(&roster, &accounts, &records);

    assert_eq!(rows[0].status, AttendanceStatus::Absent);
}

#[test]
fn test_fuzzy_display_name_still_matches() {
    let account_id = Uuid::new_v4();
    let roster = vec![entry("De Lara")];
    let accounts = vec![account(account_id, "Juan A. De Lara Jr.")];

    let rows = reconcile_roster(&roster, &accounts, &[]);

    assert_eq!(rows[0].status, AttendanceStatus::AwaitingCheckin);
    assert_eq!(rows[0].matched_account.as_ref().unwrap().id, account_id);
}

#[test]
fn test_first_account_in_list_order_wins() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let roster = vec![entry("Ana Borja")];
    let accounts = vec![account(first, "Ana Borja"), account(second, "Ana Borja")];

    let rows = reconcile_roster(&roster, &accounts, &[]);

    assert_eq!(rows[0].matched_account.as_ref().unwrap().id, first);
}

#[test]
fn test_unregistered_with_hand_recorded_name_keeps_status_but_surfaces_timestamp() {
    let meeting_id = Uuid::new_v4();
    let roster = vec![entry("Rexxa Anika Iway")];
    let mut hand_recorded = record(meeting_id, Uuid::new_v4(), RecordedStatus::Present);
    hand_recorded.recorded_name = "rexxa anika iway".to_string();

    let rows = reconcile_roster(&roster, &[], &[hand_recorded]);

    assert_eq!(rows[0].status, AttendanceStatus::Unregistered);
    assert!(rows[0].marked_at.is_some());
}

#[test]
fn test_rows_keep_roster_order() {
    let roster = officer_roster();
    let rows = reconcile_roster(&roster, &[], &[]);

    let names: Vec<&str> = rows.iter().map(|r| r.entry.name.as_str()).collect();
    let expected: Vec<&str> = roster.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_roster_is_stable_and_grouped() {
    let roster = officer_roster();

    assert_eq!(roster.len(), 26);
    assert_eq!(roster[0].name, "De Lara");
    assert_eq!(roster[0].group, RosterGroup::Executive);
    assert!(roster.iter().any(|e| e.group == RosterGroup::Creative));
    assert!(roster.iter().any(|e| e.group == RosterGroup::Logistics));
}

#[test]
fn test_summary_counts_and_rate() {
    let meeting_id = Uuid::new_v4();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let roster = vec![entry("Ana Borja"), entry("Carl Dizon"), entry("Ely Flores"), entry("Gina Huang")];
    let accounts = vec![account(a, "Ana Borja"), account(b, "Carl Dizon")];
    let records = vec![record(meeting_id, a, RecordedStatus::Present)];

    let rows = reconcile_roster(&roster, &accounts, &records);
    let summary = summarize(&rows);

    // One of four roster rows is present; everyone else counts absent
    assert_eq!(summary.present, 1);
    assert_eq!(summary.absent, 3);
    assert_eq!(summary.rate, 25);
}

#[test]
fn test_summary_of_empty_roster_is_zero() {
    let summary = summarize(&[]);

    assert_eq!(summary.present, 0);
    assert_eq!(summary.absent, 0);
    assert_eq!(summary.rate, 0);
}
