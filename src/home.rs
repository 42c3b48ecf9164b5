use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppResult, include_res, messages, models::Message, res, session};

#[debug_handler]
pub async fn home(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let flash = res::flash_html(session::take_flash(&session).await?);

    let Some(user_id) = session::current_user_id(&session).await? else {
        return Ok(Html(
            include_res!(str, "/pages/home_anon.html").replace("{flash}", &flash),
        )
        .into_response());
    };

    let mut items = String::new();
    for message in Message::timeline(&db_pool, &user_id).await? {
        items += &messages::message_item(&db_pool, &message).await?;
    }

    Ok(Html(
        include_res!(str, "/pages/home.html")
            .replace("{flash}", &flash)
            .replace("{messages}", &items),
    )
    .into_response())
}
