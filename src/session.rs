use tower_sessions::Session;

use crate::{AppError, AppResult};

/// Session key holding the authenticated user's uuid.
pub const CURR_USER_KEY: &str = "curr_user";

const FLASH_KEY: &str = "flash";

pub async fn current_user_id(session: &Session) -> AppResult<Option<String>> {
    Ok(session.get::<String>(CURR_USER_KEY).await?)
}

/// Like `current_user_id`, but an anonymous visitor becomes an
/// `Unauthorized` error, which redirects to the home page.
pub async fn require_user_id(session: &Session) -> AppResult<String> {
    current_user_id(session).await?.ok_or(AppError::Unauthorized)
}

pub async fn log_in(session: &Session, user_id: &str) -> AppResult<()> {
    session.insert(CURR_USER_KEY, user_id.to_owned()).await?;
    Ok(())
}

pub async fn log_out(session: &Session) {
    session.clear().await;
}

pub async fn flash(session: &Session, message: &str) -> AppResult<()> {
    session.insert(FLASH_KEY, message.to_owned()).await?;
    Ok(())
}

/// Takes the pending flash message, if any. A flash is shown once.
pub async fn take_flash(session: &Session) -> AppResult<Option<String>> {
    Ok(session.remove::<String>(FLASH_KEY).await?)
}
