use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult};

pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.jpg";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl User {
    /// Registers a new user with a bcrypt-hashed password.
    ///
    /// An empty password is rejected before anything touches the database;
    /// a duplicate username or email comes back as `AlreadyTaken`.
    pub async fn signup(
        db_pool: &SqlitePool,
        username: &str,
        email: &str,
        password: &str,
        image_url: Option<&str>,
    ) -> AppResult<User> {
        if password.is_empty() {
            return Err(AppError::PasswordRequired);
        }

        let uuid = Uuid::now_v7().to_string();
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        let image_url = image_url.unwrap_or(DEFAULT_IMAGE_URL);

        let result = sqlx::query(
            "INSERT INTO users (uuid,username,email,password_hash,image_url,header_image_url) VALUES (?,?,?,?,?,?)",
        )
        .bind(&uuid)
        .bind(username)
        .bind(email)
        .bind(&password_hash)
        .bind(image_url)
        .bind(DEFAULT_HEADER_IMAGE_URL)
        .execute(db_pool)
        .await;

        match result {
            Ok(_) => Ok(User {
                uuid,
                username: username.to_owned(),
                email: email.to_owned(),
                password_hash,
                image_url: image_url.to_owned(),
                header_image_url: DEFAULT_HEADER_IMAGE_URL.to_owned(),
                bio: None,
                location: None,
            }),
            Err(err) if is_unique_violation(&err) => Err(AppError::AlreadyTaken),
            Err(err) => Err(err.into()),
        }
    }

    /// Checks a username/password pair; `None` means unknown username or
    /// wrong password.
    pub async fn authenticate(
        db_pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let Some(user) = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username=?")
            .bind(username)
            .fetch_optional(db_pool)
            .await?
        else {
            return Ok(None);
        };

        if bcrypt::verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub async fn by_uuid(db_pool: &SqlitePool, uuid: &str) -> AppResult<Option<User>> {
        Ok(sqlx::query_as("SELECT * FROM users WHERE uuid=?")
            .bind(uuid)
            .fetch_optional(db_pool)
            .await?)
    }

    pub async fn search(db_pool: &SqlitePool, q: Option<&str>) -> AppResult<Vec<User>> {
        let users = match q {
            Some(q) => {
                sqlx::query_as("SELECT * FROM users WHERE username LIKE ? ORDER BY username")
                    .bind(format!("%{q}%"))
                    .fetch_all(db_pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM users ORDER BY username")
                    .fetch_all(db_pool)
                    .await?
            }
        };
        Ok(users)
    }

    pub async fn update_profile(
        &self,
        db_pool: &SqlitePool,
        username: &str,
        email: &str,
        image_url: &str,
        header_image_url: &str,
        bio: Option<&str>,
        location: Option<&str>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET username=?,email=?,image_url=?,header_image_url=?,bio=?,location=? WHERE uuid=?",
        )
        .bind(username)
        .bind(email)
        .bind(image_url)
        .bind(header_image_url)
        .bind(bio)
        .bind(location)
        .bind(&self.uuid)
        .execute(db_pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(AppError::AlreadyTaken),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes the user along with their messages, likes, and follow edges.
    /// Join rows go first so no row ever references a missing parent.
    pub async fn delete(db_pool: &SqlitePool, uuid: &str) -> AppResult<()> {
        sqlx::query(
            "DELETE FROM likes WHERE user_id=? OR message_id IN (SELECT uuid FROM messages WHERE user_id=?)",
        )
        .bind(uuid)
        .bind(uuid)
        .execute(db_pool)
        .await?;
        sqlx::query("DELETE FROM follows WHERE user_following_id=? OR user_being_followed_id=?")
            .bind(uuid)
            .bind(uuid)
            .execute(db_pool)
            .await?;
        sqlx::query("DELETE FROM messages WHERE user_id=?")
            .bind(uuid)
            .execute(db_pool)
            .await?;
        sqlx::query("DELETE FROM users WHERE uuid=?")
            .bind(uuid)
            .execute(db_pool)
            .await?;
        Ok(())
    }

    pub async fn follow(&self, db_pool: &SqlitePool, other: &User) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO follows (user_being_followed_id,user_following_id) VALUES (?,?) ON CONFLICT DO NOTHING",
        )
        .bind(&other.uuid)
        .bind(&self.uuid)
        .execute(db_pool)
        .await?;
        Ok(())
    }

    pub async fn unfollow(&self, db_pool: &SqlitePool, other: &User) -> AppResult<()> {
        sqlx::query("DELETE FROM follows WHERE user_being_followed_id=? AND user_following_id=?")
            .bind(&other.uuid)
            .bind(&self.uuid)
            .execute(db_pool)
            .await?;
        Ok(())
    }

    pub async fn is_following(&self, db_pool: &SqlitePool, other: &User) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM follows WHERE user_following_id=? AND user_being_followed_id=?",
        )
        .bind(&self.uuid)
        .bind(&other.uuid)
        .fetch_optional(db_pool)
        .await?;
        Ok(row.is_some())
    }

    pub async fn is_followed_by(&self, db_pool: &SqlitePool, other: &User) -> AppResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM follows WHERE user_following_id=? AND user_being_followed_id=?",
        )
        .bind(&other.uuid)
        .bind(&self.uuid)
        .fetch_optional(db_pool)
        .await?;
        Ok(row.is_some())
    }

    pub async fn following(&self, db_pool: &SqlitePool) -> AppResult<Vec<User>> {
        Ok(sqlx::query_as(
            "SELECT u.* FROM users u JOIN follows f ON f.user_being_followed_id=u.uuid WHERE f.user_following_id=? ORDER BY u.username",
        )
        .bind(&self.uuid)
        .fetch_all(db_pool)
        .await?)
    }

    pub async fn followers(&self, db_pool: &SqlitePool) -> AppResult<Vec<User>> {
        Ok(sqlx::query_as(
            "SELECT u.* FROM users u JOIN follows f ON f.user_following_id=u.uuid WHERE f.user_being_followed_id=? ORDER BY u.username",
        )
        .bind(&self.uuid)
        .fetch_all(db_pool)
        .await?)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
