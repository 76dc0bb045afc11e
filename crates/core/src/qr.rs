//! The QR payload convention.
//!
//! Officer badges encode `checkits://officer/{id}`; per-meeting check-in
//! codes encode `checkits://meeting/{id}/checkin`. Only the payload
//! strings are defined here — rendering and camera decoding happen in the
//! clients. Parsers accept a bare id as well, since some scanner apps
//! strip the scheme.

use uuid::Uuid;

const OFFICER_PREFIX: &str = "checkits://officer/";
const MEETING_PREFIX: &str = "checkits://meeting/";
const CHECKIN_SUFFIX: &str = "/checkin";

/// Payload string for an officer's personal badge.
pub fn officer_payload(id: Uuid) -> String {
    format!("{OFFICER_PREFIX}{id}")
}

/// Payload string for a meeting's check-in code.
pub fn meeting_payload(id: Uuid) -> String {
    format!("{MEETING_PREFIX}{id}{CHECKIN_SUFFIX}")
}

/// Extracts the officer id from a scanned badge payload or a bare id.
pub fn parse_officer(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    let id = raw.strip_prefix(OFFICER_PREFIX).unwrap_or(raw);
    Uuid::parse_str(id).ok()
}

/// Extracts the meeting id from a scanned check-in payload or a bare id.
pub fn parse_meeting_checkin(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    let id = raw
        .strip_prefix(MEETING_PREFIX)
        .and_then(|rest| rest.strip_suffix(CHECKIN_SUFFIX))
        .unwrap_or(raw);
    Uuid::parse_str(id).ok()
}
