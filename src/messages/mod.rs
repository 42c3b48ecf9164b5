mod delete;
mod like;
mod new;
mod show;

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::{AppResult, AppState, include_res, models::Message, res};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", get(new::new_message_page).post(new::new_message))
        .route("/{id}", get(show::show_message))
        .route("/{id}/delete", post(delete::delete_message))
        .route("/{id}/like", post(like::toggle_like))
}

pub(crate) async fn message_item(db_pool: &SqlitePool, message: &Message) -> AppResult<String> {
    let (username,): (String,) = sqlx::query_as("SELECT username FROM users WHERE uuid=?")
        .bind(&message.user_id)
        .fetch_optional(db_pool)
        .await?
        .unwrap_or(("unknown".to_owned(),));

    Ok(include_res!(str, "/pages/messages/message_item.html")
        .replace("{uuid}", &message.uuid)
        .replace("{user_id}", &message.user_id)
        .replace("{username}", &res::esc(&username))
        .replace("{timestamp}", &message.timestamp)
        .replace("{text}", &res::esc(&message.text)))
}
