use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppError, AppResult, models::Message, session};

#[debug_handler]
pub(crate) async fn toggle_like(
    Path(message_id): Path<String>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let user_id = session::require_user_id(&session).await?;

    let Some(message) = Message::by_uuid(&db_pool, &message_id).await? else {
        return Err(AppError::NotFound);
    };
    // Liking your own warble stays a no-op.
    if message.user_id != user_id {
        if message.is_liked_by(&db_pool, &user_id).await? {
            message.unlike(&db_pool, &user_id).await?;
        } else {
            message.like(&db_pool, &user_id).await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}
