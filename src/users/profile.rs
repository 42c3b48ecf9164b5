use axum::{
    Form, debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    AppError, AppResult, forms,
    forms::UserEditForm,
    include_res,
    models::{DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL, User},
    res, session,
};

fn edit_html(user: &User, errors: &str) -> Response {
    Html(
        include_res!(str, "/pages/users/edit.html")
            .replace("{errors}", errors)
            .replace("{username}", &res::esc(&user.username))
            .replace("{email}", &res::esc(&user.email))
            .replace("{image_url}", &res::esc(&user.image_url))
            .replace("{header_image_url}", &res::esc(&user.header_image_url))
            .replace("{bio}", &res::esc(user.bio.as_deref().unwrap_or("")))
            .replace("{location}", &res::esc(user.location.as_deref().unwrap_or(""))),
    )
    .into_response()
}

async fn current_user(db_pool: &SqlitePool, session: &Session) -> AppResult<User> {
    let user_id = session::require_user_id(session).await?;
    User::by_uuid(db_pool, &user_id)
        .await?
        .ok_or(AppError::Unauthorized)
}

#[debug_handler]
pub(crate) async fn edit_page(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let user = current_user(&db_pool, &session).await?;
    Ok(edit_html(&user, ""))
}

#[debug_handler]
pub(crate) async fn edit(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<UserEditForm>,
) -> AppResult<Response> {
    let user = current_user(&db_pool, &session).await?;

    if let Err(errors) = form.validate() {
        return Ok(edit_html(&user, &forms::error_list(&errors)));
    }

    // The edit only goes through once the user re-proves who they are.
    if User::authenticate(&db_pool, &user.username, &form.password)
        .await?
        .is_none()
    {
        return Ok(edit_html(
            &user,
            "<li class=\"form-error\">Invalid password</li>",
        ));
    }

    let result = user
        .update_profile(
            &db_pool,
            &form.username,
            &form.email,
            forms::non_empty(&form.image_url).unwrap_or(DEFAULT_IMAGE_URL),
            forms::non_empty(&form.header_image_url).unwrap_or(DEFAULT_HEADER_IMAGE_URL),
            forms::non_empty(&form.bio),
            forms::non_empty(&form.location),
        )
        .await;

    match result {
        Ok(()) => Ok(Redirect::to(&format!("/users/{}", user.uuid)).into_response()),
        Err(AppError::AlreadyTaken) => Ok(edit_html(
            &user,
            "<li class=\"form-error\">Username already taken</li>",
        )),
        Err(err) => Err(err),
    }
}
