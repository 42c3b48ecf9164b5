use axum::{
    debug_handler,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppResult, include_res, models::User, res, session, users};

#[derive(Deserialize)]
pub(crate) struct SearchQuery {
    pub(crate) q: Option<String>,
}

#[debug_handler]
pub(crate) async fn list_users(
    Query(SearchQuery { q }): Query<SearchQuery>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let flash = res::flash_html(session::take_flash(&session).await?);

    let mut cards = String::new();
    for user in User::search(&db_pool, q.as_deref()).await? {
        cards += &users::user_card(&user);
    }

    Ok(Html(
        include_res!(str, "/pages/users/index.html")
            .replace("{flash}", &flash)
            .replace("{user_cards}", &cards),
    )
    .into_response())
}
