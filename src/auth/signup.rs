use axum::{
    Form, debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use tracing::info;
use validator::Validate;

use crate::{AppError, AppResult, forms, forms::UserAddForm, include_res, models::User, res, session};

fn signup_html(flash: &str, errors: &str) -> Response {
    Html(
        include_res!(str, "/pages/signup.html")
            .replace("{flash}", flash)
            .replace("{errors}", errors),
    )
    .into_response()
}

#[debug_handler]
pub(crate) async fn signup_page(session: Session) -> AppResult<Response> {
    let flash = res::flash_html(session::take_flash(&session).await?);
    Ok(signup_html(&flash, ""))
}

#[debug_handler]
pub(crate) async fn signup(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<UserAddForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        return Ok(signup_html("", &forms::error_list(&errors)));
    }

    let user = match User::signup(
        &db_pool,
        &form.username,
        &form.email,
        &form.password,
        forms::non_empty(&form.image_url),
    )
    .await
    {
        Ok(user) => user,
        Err(AppError::AlreadyTaken) => {
            return Ok(signup_html(
                "",
                "<li class=\"form-error\">Username already taken</li>",
            ));
        }
        Err(err) => return Err(err),
    };

    info!(username = %user.username, "new user signed up");
    session::log_in(&session, &user.uuid).await?;

    Ok(Redirect::to("/").into_response())
}
