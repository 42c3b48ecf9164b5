use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;

use crate::{AppError, AppResult, include_res, messages, models::{Message, User}, res};

#[debug_handler]
pub(crate) async fn show_user(
    Path(user_id): Path<String>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Response> {
    let Some(user) = User::by_uuid(&db_pool, &user_id).await? else {
        return Err(AppError::NotFound);
    };

    let mut items = String::new();
    for message in Message::of_user(&db_pool, &user.uuid).await? {
        items += &messages::message_item(&db_pool, &message).await?;
    }

    Ok(Html(
        include_res!(str, "/pages/users/show.html")
            .replace("{uuid}", &user.uuid)
            .replace("{username}", &res::esc(&user.username))
            .replace("{image_url}", &res::esc(&user.image_url))
            .replace("{header_image_url}", &res::esc(&user.header_image_url))
            .replace("{bio}", &res::esc(user.bio.as_deref().unwrap_or("")))
            .replace("{location}", &res::esc(user.location.as_deref().unwrap_or("")))
            .replace("{messages}", &items),
    )
    .into_response())
}
