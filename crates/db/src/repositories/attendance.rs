use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbAttendance;

/// Upserts the one attendance record for a (meeting, user) pair.
///
/// `marked_at` is always server-assigned, so re-marking someone refreshes
/// the timestamp along with the status.
pub async fn mark_attendance(
    pool: &Pool<Postgres>,
    meeting_id: Uuid,
    user_id: Uuid,
    recorded_name: &str,
    status: &str,
    marked_by: Option<Uuid>,
) -> Result<DbAttendance> {
    tracing::debug!(
        "Marking attendance: meeting_id={}, user_id={}, status={}",
        meeting_id,
        user_id,
        status
    );

    let record = sqlx::query_as::<_, DbAttendance>(
        r#"
        INSERT INTO attendance (meeting_id, user_id, recorded_name, status, marked_at, marked_by)
        VALUES ($1, $2, $3, $4, NOW(), $5)
        ON CONFLICT (meeting_id, user_id)
        DO UPDATE SET recorded_name = EXCLUDED.recorded_name,
                      status = EXCLUDED.status,
                      marked_at = NOW(),
                      marked_by = EXCLUDED.marked_by
        RETURNING id, meeting_id, user_id, recorded_name, status, marked_at, marked_by
        "#,
    )
    .bind(meeting_id)
    .bind(user_id)
    .bind(recorded_name)
    .bind(status)
    .bind(marked_by)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

pub async fn get_attendance_for_meeting(
    pool: &Pool<Postgres>,
    meeting_id: Uuid,
) -> Result<Vec<DbAttendance>> {
    tracing::debug!("Getting attendance for meeting: {}", meeting_id);

    let records = sqlx::query_as::<_, DbAttendance>(
        r#"
        SELECT id, meeting_id, user_id, recorded_name, status, marked_at, marked_by
        FROM attendance
        WHERE meeting_id = $1
        "#,
    )
    .bind(meeting_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

pub async fn get_attendance_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbAttendance>> {
    tracing::debug!("Getting attendance for user: {}", user_id);

    let records = sqlx::query_as::<_, DbAttendance>(
        r#"
        SELECT id, meeting_id, user_id, recorded_name, status, marked_at, marked_by
        FROM attendance
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

pub async fn count_present_for_meeting(pool: &Pool<Postgres>, meeting_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM attendance
        WHERE meeting_id = $1 AND status = 'present'
        "#,
    )
    .bind(meeting_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn delete_attendance(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting attendance record: {}", id);

    sqlx::query("DELETE FROM attendance WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
