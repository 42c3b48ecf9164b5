use sqlx::SqlitePool;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use crate::AppResult;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Message {
    pub uuid: String,
    pub user_id: String,
    pub text: String,
    /// RFC 3339, so lexicographic order is chronological order.
    pub timestamp: String,
}

impl Message {
    pub async fn create(db_pool: &SqlitePool, user_id: &str, text: &str) -> AppResult<Message> {
        let uuid = Uuid::now_v7().to_string();
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(anyhow::Error::from)?;

        sqlx::query("INSERT INTO messages (uuid,user_id,text,timestamp) VALUES (?,?,?,?)")
            .bind(&uuid)
            .bind(user_id)
            .bind(text)
            .bind(&timestamp)
            .execute(db_pool)
            .await?;

        Ok(Message {
            uuid,
            user_id: user_id.to_owned(),
            text: text.to_owned(),
            timestamp,
        })
    }

    pub async fn by_uuid(db_pool: &SqlitePool, uuid: &str) -> AppResult<Option<Message>> {
        Ok(sqlx::query_as("SELECT * FROM messages WHERE uuid=?")
            .bind(uuid)
            .fetch_optional(db_pool)
            .await?)
    }

    pub async fn of_user(db_pool: &SqlitePool, user_id: &str) -> AppResult<Vec<Message>> {
        Ok(
            sqlx::query_as("SELECT * FROM messages WHERE user_id=? ORDER BY timestamp DESC")
                .bind(user_id)
                .fetch_all(db_pool)
                .await?,
        )
    }

    /// The home feed: the 100 most recent messages by the user and by
    /// everyone they follow.
    pub async fn timeline(db_pool: &SqlitePool, user_id: &str) -> AppResult<Vec<Message>> {
        Ok(sqlx::query_as(
            "SELECT * FROM messages
             WHERE user_id=?
                OR user_id IN (SELECT user_being_followed_id FROM follows WHERE user_following_id=?)
             ORDER BY timestamp DESC LIMIT 100",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(db_pool)
        .await?)
    }

    pub async fn delete(db_pool: &SqlitePool, uuid: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM likes WHERE message_id=?")
            .bind(uuid)
            .execute(db_pool)
            .await?;
        sqlx::query("DELETE FROM messages WHERE uuid=?")
            .bind(uuid)
            .execute(db_pool)
            .await?;
        Ok(())
    }

    pub async fn like(&self, db_pool: &SqlitePool, user_id: &str) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO likes (user_id,message_id) VALUES (?,?) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(&self.uuid)
        .execute(db_pool)
        .await?;
        Ok(())
    }

    pub async fn unlike(&self, db_pool: &SqlitePool, user_id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM likes WHERE user_id=? AND message_id=?")
            .bind(user_id)
            .bind(&self.uuid)
            .execute(db_pool)
            .await?;
        Ok(())
    }

    pub async fn is_liked_by(&self, db_pool: &SqlitePool, user_id: &str) -> AppResult<bool> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM likes WHERE user_id=? AND message_id=?")
                .bind(user_id)
                .bind(&self.uuid)
                .fetch_optional(db_pool)
                .await?;
        Ok(row.is_some())
    }

    pub async fn liked_by(db_pool: &SqlitePool, user_id: &str) -> AppResult<Vec<Message>> {
        Ok(sqlx::query_as(
            "SELECT m.* FROM messages m JOIN likes l ON l.message_id=m.uuid WHERE l.user_id=? ORDER BY m.timestamp DESC",
        )
        .bind(user_id)
        .fetch_all(db_pool)
        .await?)
    }
}
