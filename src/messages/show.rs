use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;

use crate::{AppError, AppResult, include_res, messages, models::Message};

#[debug_handler]
pub(crate) async fn show_message(
    Path(message_id): Path<String>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Response> {
    let Some(message) = Message::by_uuid(&db_pool, &message_id).await? else {
        return Err(AppError::NotFound);
    };

    let item = messages::message_item(&db_pool, &message).await?;

    Ok(Html(include_res!(str, "/pages/messages/show.html").replace("{message}", &item))
        .into_response())
}
