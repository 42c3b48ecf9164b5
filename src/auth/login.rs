use axum::{
    Form, debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use tracing::info;
use validator::Validate;

use crate::{AppResult, forms, forms::LoginForm, include_res, models::User, res, session};

fn login_html(flash: &str, errors: &str) -> Response {
    Html(
        include_res!(str, "/pages/login.html")
            .replace("{flash}", flash)
            .replace("{errors}", errors),
    )
    .into_response()
}

#[debug_handler]
pub(crate) async fn login_page(session: Session) -> AppResult<Response> {
    let flash = res::flash_html(session::take_flash(&session).await?);
    Ok(login_html(&flash, ""))
}

#[debug_handler]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        return Ok(login_html("", &forms::error_list(&errors)));
    }

    let Some(user) = User::authenticate(&db_pool, &form.username, &form.password).await? else {
        return Ok(login_html(
            "",
            "<li class=\"form-error\">Invalid credentials.</li>",
        ));
    };

    info!(username = %user.username, "logged in");
    session::log_in(&session, &user.uuid).await?;
    session::flash(&session, &format!("Hello, {}!", user.username)).await?;

    Ok(Redirect::to("/").into_response())
}
