use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppError, AppResult, models::Message, session};

#[debug_handler]
pub(crate) async fn delete_message(
    Path(message_id): Path<String>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let user_id = session::require_user_id(&session).await?;

    let Some(message) = Message::by_uuid(&db_pool, &message_id).await? else {
        return Err(AppError::NotFound);
    };
    // Only the author may delete.
    if message.user_id != user_id {
        return Err(AppError::Unauthorized);
    }

    Message::delete(&db_pool, &message.uuid).await?;

    Ok(Redirect::to(&format!("/users/{user_id}")).into_response())
}
