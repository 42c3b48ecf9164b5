use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppError, AppResult, include_res, models::User, res, session, users};

async fn lookup(db_pool: &SqlitePool, user_id: &str) -> AppResult<User> {
    User::by_uuid(db_pool, user_id)
        .await?
        .ok_or(AppError::NotFound)
}

fn follow_list_html(page: &str, user: &User, listed: &[User]) -> Response {
    let mut cards = String::new();
    for other in listed {
        cards += &users::user_card(other);
    }

    Html(
        page.replace("{uuid}", &user.uuid)
            .replace("{username}", &res::esc(&user.username))
            .replace("{user_cards}", &cards),
    )
    .into_response()
}

#[debug_handler]
pub(crate) async fn following_page(
    Path(user_id): Path<String>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    session::require_user_id(&session).await?;

    let user = lookup(&db_pool, &user_id).await?;
    let listed = user.following(&db_pool).await?;
    Ok(follow_list_html(
        include_res!(str, "/pages/users/following.html"),
        &user,
        &listed,
    ))
}

#[debug_handler]
pub(crate) async fn followers_page(
    Path(user_id): Path<String>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    session::require_user_id(&session).await?;

    let user = lookup(&db_pool, &user_id).await?;
    let listed = user.followers(&db_pool).await?;
    Ok(follow_list_html(
        include_res!(str, "/pages/users/followers.html"),
        &user,
        &listed,
    ))
}

#[debug_handler]
pub(crate) async fn follow(
    Path(user_id): Path<String>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let me = session::require_user_id(&session).await?;

    let me = lookup(&db_pool, &me).await?;
    let other = lookup(&db_pool, &user_id).await?;
    me.follow(&db_pool, &other).await?;

    Ok(Redirect::to(&format!("/users/{}/following", me.uuid)).into_response())
}

#[debug_handler]
pub(crate) async fn stop_following(
    Path(user_id): Path<String>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let me = session::require_user_id(&session).await?;

    let me = lookup(&db_pool, &me).await?;
    let other = lookup(&db_pool, &user_id).await?;
    me.unfollow(&db_pool, &other).await?;

    Ok(Redirect::to(&format!("/users/{}/following", me.uuid)).into_response())
}
