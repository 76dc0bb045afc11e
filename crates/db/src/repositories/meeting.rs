use chrono::{NaiveDate, NaiveTime};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use checkits_core::models::meeting::UpdateMeetingRequest;

use crate::models::DbMeeting;

pub async fn create_meeting(
    pool: &Pool<Postgres>,
    title: &str,
    date: NaiveDate,
    time: Option<NaiveTime>,
    location: &str,
    room: Option<&str>,
    description: Option<&str>,
    created_by: Option<Uuid>,
    school_year: Option<&str>,
) -> Result<DbMeeting> {
    tracing::debug!("Creating meeting: title={}, date={}", title, date);

    let meeting = sqlx::query_as::<_, DbMeeting>(
        r#"
        INSERT INTO meetings (title, date, time, location, room, description, created_by, school_year)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, date, time, location, room, description,
                  created_by, school_year, created_at
        "#,
    )
    .bind(title)
    .bind(date)
    .bind(time)
    .bind(location)
    .bind(room)
    .bind(description)
    .bind(created_by)
    .bind(school_year)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Meeting created successfully: id={}", meeting.id);
    Ok(meeting)
}

pub async fn get_meetings(pool: &Pool<Postgres>) -> Result<Vec<DbMeeting>> {
    let meetings = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT id, title, date, time, location, room, description,
               created_by, school_year, created_at
        FROM meetings
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(meetings)
}

pub async fn get_meeting_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbMeeting>> {
    tracing::debug!("Getting meeting by id: {}", id);

    let meeting = sqlx::query_as::<_, DbMeeting>(
        r#"
        SELECT id, title, date, time, location, room, description,
               created_by, school_year, created_at
        FROM meetings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(meeting)
}

pub async fn update_meeting(
    pool: &Pool<Postgres>,
    id: Uuid,
    update: &UpdateMeetingRequest,
) -> Result<DbMeeting> {
    let meeting = get_meeting_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Meeting not found"))?;

    let title = update.title.as_deref().unwrap_or(&meeting.title);
    let date = update.date.unwrap_or(meeting.date);
    let time = update.time.or(meeting.time);
    let location = update.location.as_deref().unwrap_or(&meeting.location);
    let room = update.room.as_deref().or(meeting.room.as_deref());
    let description = update
        .description
        .as_deref()
        .or(meeting.description.as_deref());
    let school_year = update
        .school_year
        .as_deref()
        .or(meeting.school_year.as_deref());

    let updated = sqlx::query_as::<_, DbMeeting>(
        r#"
        UPDATE meetings
        SET title = $2, date = $3, time = $4, location = $5, room = $6,
            description = $7, school_year = $8
        WHERE id = $1
        RETURNING id, title, date, time, location, room, description,
                  created_by, school_year, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(date)
    .bind(time)
    .bind(location)
    .bind(room)
    .bind(description)
    .bind(school_year)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Meeting updated successfully: id={}", id);
    Ok(updated)
}

/// Deletes a meeting and its attendance records. The records go first so
/// a failure part-way never leaves orphaned rows pointing at a missing
/// meeting.
pub async fn delete_meeting(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    tracing::debug!("Deleting meeting: id={}", id);

    sqlx::query("DELETE FROM attendance WHERE meeting_id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    sqlx::query("DELETE FROM meetings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
