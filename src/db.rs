use sqlx::SqlitePool;

use crate::AppResult;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    uuid TEXT PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    image_url TEXT NOT NULL,
    header_image_url TEXT NOT NULL,
    bio TEXT,
    location TEXT
);

CREATE TABLE IF NOT EXISTS messages (
    uuid TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(uuid),
    text TEXT NOT NULL,
    timestamp TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS follows (
    user_being_followed_id TEXT NOT NULL REFERENCES users(uuid),
    user_following_id TEXT NOT NULL REFERENCES users(uuid),
    PRIMARY KEY (user_being_followed_id, user_following_id)
);

CREATE TABLE IF NOT EXISTS likes (
    user_id TEXT NOT NULL REFERENCES users(uuid),
    message_id TEXT NOT NULL REFERENCES messages(uuid),
    PRIMARY KEY (user_id, message_id)
);
";

/// Applies the schema. Every statement is idempotent, so this runs
/// unconditionally at startup.
pub async fn migrate(db_pool: &SqlitePool) -> AppResult<()> {
    sqlx::raw_sql(SCHEMA).execute(db_pool).await?;
    Ok(())
}
