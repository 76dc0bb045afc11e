use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(255) NOT NULL,
            display_name VARCHAR(255) NOT NULL,
            photo_url TEXT NULL,
            id_number VARCHAR(64) NULL,
            position VARCHAR(255) NULL,
            role VARCHAR(16) NOT NULL DEFAULT 'officer',
            school_year VARCHAR(16) NOT NULL DEFAULT '',
            is_profile_complete BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_role CHECK (role IN ('admin', 'officer'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create meetings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meetings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            time TIME NULL,
            location VARCHAR(255) NOT NULL,
            room VARCHAR(255) NULL,
            description TEXT NULL,
            created_by UUID NULL,
            school_year VARCHAR(16) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create attendance table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            meeting_id UUID NOT NULL REFERENCES meetings(id),
            user_id UUID NOT NULL REFERENCES users(id),
            recorded_name VARCHAR(255) NOT NULL,
            status VARCHAR(16) NOT NULL,
            marked_at TIMESTAMP WITH TIME ZONE NULL,
            marked_by UUID NULL,
            CONSTRAINT valid_status CHECK (status IN ('present', 'absent')),
            CONSTRAINT one_record_per_meeting UNIQUE (meeting_id, user_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_attendance_meeting_id ON attendance(meeting_id);",
        "CREATE INDEX IF NOT EXISTS idx_attendance_user_id ON attendance(user_id);",
        "CREATE INDEX IF NOT EXISTS idx_meetings_date ON meetings(date);",
        "CREATE INDEX IF NOT EXISTS idx_users_id_number ON users(id_number);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
