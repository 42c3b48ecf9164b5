use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppError, AppResult, include_res, messages, models::{Message, User}, res, session};

#[debug_handler]
pub(crate) async fn likes_page(
    Path(user_id): Path<String>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    session::require_user_id(&session).await?;

    let Some(user) = User::by_uuid(&db_pool, &user_id).await? else {
        return Err(AppError::NotFound);
    };

    let mut items = String::new();
    for message in Message::liked_by(&db_pool, &user.uuid).await? {
        items += &messages::message_item(&db_pool, &message).await?;
    }

    Ok(Html(
        include_res!(str, "/pages/users/likes.html")
            .replace("{uuid}", &user.uuid)
            .replace("{username}", &res::esc(&user.username))
            .replace("{messages}", &items),
    )
    .into_response())
}
