use checkits_core::qr::{meeting_payload, officer_payload, parse_meeting_checkin, parse_officer};
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[test]
fn test_officer_payload_round_trip() {
    let id = Uuid::new_v4();
    let payload = officer_payload(id);

    assert_eq!(payload, format!("checkits://officer/{}", id));
    assert_eq!(parse_officer(&payload), Some(id));
}

#[test]
fn test_meeting_payload_round_trip() {
    let id = Uuid::new_v4();
    let payload = meeting_payload(id);

    assert_eq!(payload, format!("checkits://meeting/{}/checkin", id));
    assert_eq!(parse_meeting_checkin(&payload), Some(id));
}

#[test]
fn test_bare_id_is_accepted() {
    // Some scanner apps hand over just the trailing id segment
    let id = Uuid::new_v4();

    assert_eq!(parse_officer(&id.to_string()), Some(id));
    assert_eq!(parse_meeting_checkin(&id.to_string()), Some(id));
}

#[test]
fn test_surrounding_whitespace_is_tolerated() {
    let id = Uuid::new_v4();
    let payload = format!("  {}  ", officer_payload(id));

    assert_eq!(parse_officer(&payload), Some(id));
}

#[test]
fn test_garbage_payloads_are_rejected() {
    assert_eq!(parse_officer("https://example.com/phishing"), None);
    assert_eq!(parse_officer("checkits://officer/not-a-uuid"), None);
    assert_eq!(parse_meeting_checkin("checkits://meeting/not-a-uuid/checkin"), None);
    assert_eq!(parse_meeting_checkin(""), None);
}

#[test]
fn test_officer_parser_rejects_meeting_payloads() {
    let id = Uuid::new_v4();

    // Wrong scheme path does not strip, and the remainder is not a bare id
    assert_eq!(parse_officer(&meeting_payload(id)), None);
    assert_eq!(parse_meeting_checkin(&officer_payload(id)), None);
}
