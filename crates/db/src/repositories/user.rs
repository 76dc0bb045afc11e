use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use checkits_core::models::user::UpdateUserRequest;

use crate::models::DbUser;

pub async fn create_user(
    pool: &Pool<Postgres>,
    email: &str,
    display_name: &str,
    photo_url: Option<&str>,
    role: Option<&str>,
    school_year: Option<&str>,
) -> Result<DbUser> {
    // The very first account becomes the admin regardless of what the
    // registration flow asked for.
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    let role = if existing == 0 {
        "admin"
    } else {
        role.unwrap_or("officer")
    };

    tracing::debug!(
        "Creating user: email={}, display_name={}, role={}",
        email,
        display_name,
        role
    );

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (email, display_name, photo_url, role, school_year)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, display_name, photo_url, id_number, position,
                  role, school_year, is_profile_complete, created_at
        "#,
    )
    .bind(email)
    .bind(display_name)
    .bind(photo_url)
    .bind(role)
    .bind(school_year.unwrap_or(""))
    .fetch_one(pool)
    .await?;

    tracing::debug!("User created successfully: id={}", user.id);
    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by id: {}", id);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, display_name, photo_url, id_number, position,
               role, school_year, is_profile_complete, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_all_users(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, display_name, photo_url, id_number, position,
               role, school_year, is_profile_complete, created_at
        FROM users
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_user_by_id_number(
    pool: &Pool<Postgres>,
    id_number: &str,
) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by id_number: {}", id_number);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, display_name, photo_url, id_number, position,
               role, school_year, is_profile_complete, created_at
        FROM users
        WHERE id_number = $1
        "#,
    )
    .bind(id_number)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn update_user(
    pool: &Pool<Postgres>,
    id: Uuid,
    update: &UpdateUserRequest,
) -> Result<DbUser> {
    let user = get_user_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("User not found"))?;

    let display_name = update.display_name.as_deref().unwrap_or(&user.display_name);
    let photo_url = update.photo_url.as_deref().or(user.photo_url.as_deref());
    let id_number = update.id_number.as_deref().or(user.id_number.as_deref());
    let position = update.position.as_deref().or(user.position.as_deref());
    let school_year = update.school_year.as_deref().unwrap_or(&user.school_year);
    let is_profile_complete = update
        .is_profile_complete
        .unwrap_or(user.is_profile_complete);

    let updated = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET display_name = $2, photo_url = $3, id_number = $4, position = $5,
            school_year = $6, is_profile_complete = $7
        WHERE id = $1
        RETURNING id, email, display_name, photo_url, id_number, position,
                  role, school_year, is_profile_complete, created_at
        "#,
    )
    .bind(id)
    .bind(display_name)
    .bind(photo_url)
    .bind(id_number)
    .bind(position)
    .bind(school_year)
    .bind(is_profile_complete)
    .fetch_one(pool)
    .await?;

    tracing::debug!("User updated successfully: id={}", id);
    Ok(updated)
}
